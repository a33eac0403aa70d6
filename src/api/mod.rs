//! Completion API integration
//!
//! This module provides the strategy interface for submitting completion
//! prompts to an inference server, plus the HTTP implementation of it.

pub mod backend;
pub mod completions;

// Re-export commonly used types
pub use backend::{BackendError, CompletionBackend};
pub use completions::CompletionClient;
