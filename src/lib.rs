//! lmsieve - client utilities for local OpenAI-compatible LLM servers
//!
//! This library covers the two chores every "ask a local model for JSON"
//! workflow needs and keeps nothing else:
//!
//! - **Availability probing**: confirm the inference server is reachable
//!   and that a named model appears in its `/models` listing, with errors
//!   that distinguish "server down", "listing broken", "listing malformed",
//!   and "model missing".
//! - **Structured-text extraction**: pull an embedded JSON document out of
//!   free-form model output, on a best-effort basis, by way of the first
//!   ```` ```json ```` fence or the whole text as a fallback.
//!
//! A thin [`api`] layer submits completion prompts behind the
//! [`CompletionBackend`] strategy trait, so the transport stays swappable.
//! All I/O is synchronous and blocking; callers needing concurrency
//! parallelize at a higher layer (the extractor is pure and thread-safe).
//!
//! # Example Usage
//!
//! ```no_run
//! use lmsieve::{extract_json, CompletionBackend, ServerProbe};
//! use lmsieve::api::CompletionClient;
//!
//! fn ask_for_json(prompt: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let host = "http://127.0.0.1:1234/v1";
//!     let model = "phi-3.1-mini-128k-instruct";
//!
//!     // Go/no-go gate: server must be up and must host the model
//!     ServerProbe::new(host.to_string()).check_model(model)?;
//!
//!     let client = CompletionClient::new(host.to_string(), model.to_string());
//!     let text = client.complete(prompt)?;
//!
//!     // Extraction may fail silently; check before use
//!     match extract_json(&text) {
//!         Some(value) => println!("{}", value),
//!         None => println!("model returned no usable JSON"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`probe`]: server availability and model-presence checking
//! - [`extract`]: JSON extraction from free-form text
//! - [`api`]: completion submission (strategy trait + HTTP client)
//! - [`config`]: environment-driven configuration
//! - [`cli`], [`util`]: demo binary plumbing and logging setup

// Public modules
pub mod api;
pub mod cli;
pub mod config;
pub mod extract;
pub mod probe;
pub mod util;

// Re-export key types for convenient access
pub use api::backend::{BackendError, CompletionBackend};
pub use api::completions::CompletionClient;
pub use config::{ConfigError, SieveConfig};
pub use extract::extract_json;
pub use probe::{model_ids, ProbeError, ServerProbe};
pub use util::logging::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
