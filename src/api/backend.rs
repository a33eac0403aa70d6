//! Completion backend abstraction
//!
//! A [`CompletionBackend`] submits one prompt and returns one completion's
//! text. The transport behind it (raw HTTP, a vendor SDK, a test double) is
//! an interchangeable strategy; callers only depend on this trait.

use thiserror::Error;

/// Errors that can occur while submitting a completion
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The server answered with a non-success status
    #[error("API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {seconds} seconds")]
    TimeoutError { seconds: u64 },

    /// Transport-level failure (unreachable host, broken connection)
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The server answered, but the body violates the completions shape
    #[error("Invalid response from server: {message}")]
    InvalidResponse { message: String },
}

/// Strategy interface for submitting a completion prompt
///
/// Implementations are stateless between calls and safe to share across
/// threads; each `complete` call is a single request/response exchange with
/// no internal retries.
pub trait CompletionBackend: Send + Sync {
    /// Submits `prompt` and returns the first completion's text
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the request fails, times out, or the
    /// response cannot be interpreted as a completion.
    fn complete(&self, prompt: &str) -> Result<String, BackendError>;

    /// Human-readable name of this backend
    fn name(&self) -> &str;

    /// Optional model/endpoint description for logging and diagnostics
    fn model_info(&self) -> Option<String> {
        None
    }
}
