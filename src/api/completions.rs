//! HTTP completion client for OpenAI-compatible servers
//!
//! This is the raw-HTTP implementation of [`CompletionBackend`]: a single
//! POST to the server's `/completions` endpoint with a deterministic,
//! extraction-friendly payload (low temperature, modest token budget), and
//! the first choice's text as the result.
//!
//! # Example
//!
//! ```no_run
//! use lmsieve::api::{CompletionBackend, CompletionClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CompletionClient::new(
//!     "http://127.0.0.1:1234/v1".to_string(),
//!     "phi-3.1-mini-128k-instruct".to_string(),
//! );
//!
//! let text = client.complete("Reply with a JSON list of primes below 10.")?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

use crate::api::backend::{BackendError, CompletionBackend};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Default request timeout for completion calls
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Token budget for extraction-style prompts
const MAX_TOKENS: u32 = 200;

/// Sampling temperature; kept at zero for deterministic output
const TEMPERATURE: f32 = 0.0;

/// Completion client backed by a plain HTTP POST
///
/// Thread-safe; can be shared across threads with `Arc`. Each call opens
/// and completes its own exchange, with no connection state the caller has
/// to manage.
pub struct CompletionClient {
    /// Server base URL (e.g., "http://127.0.0.1:1234/v1")
    endpoint: String,

    /// Model identifier sent with every request
    model: String,

    /// Shared HTTP client with connection pooling
    http_client: Client,

    /// Request timeout duration
    timeout: Duration,
}

impl CompletionClient {
    /// Creates a client with the default timeout
    pub fn new(endpoint: String, model: String) -> Self {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client with a custom timeout
    pub fn with_timeout(endpoint: String, model: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint,
            model,
            http_client,
            timeout,
        }
    }

    fn submit(&self, prompt: &str) -> Result<String, BackendError> {
        let url = format!("{}/completions", self.endpoint);

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(
            "Sending completion request to {}: prompt_length={}",
            url,
            prompt.len()
        );

        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Completion request timed out after {:?}", self.timeout);
                    BackendError::TimeoutError {
                        seconds: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    error!("Cannot connect to server at {}", self.endpoint);
                    BackendError::NetworkError {
                        message: format!("Connection failed: {}", e),
                    }
                } else {
                    error!("Completion request error: {}", e);
                    BackendError::NetworkError {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let elapsed = start.elapsed();

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();

            error!("Server returned error status {}: {}", status, body);

            return Err(BackendError::ApiError {
                message: format!("HTTP {}: {}", status, body),
                status_code: Some(status.as_u16()),
            });
        }

        let completion: CompletionResponse = response.json().map_err(|e| {
            error!("Failed to parse completion response: {}", e);
            BackendError::InvalidResponse {
                message: format!("JSON parse error: {}", e),
            }
        })?;

        info!("Completion finished in {:.2}s", elapsed.as_secs_f64());

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion stats: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .first()
            .and_then(|choice| choice.text.clone())
            .ok_or_else(|| BackendError::InvalidResponse {
                message: "'choices' missing or empty in completion response".to_string(),
            })
    }
}

impl CompletionBackend for CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        self.submit(prompt)
    }

    fn name(&self) -> &str {
        "openai-http"
    }

    fn model_info(&self) -> Option<String> {
        Some(format!("{} @ {}", self.model, self.endpoint))
    }
}

impl fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Request body for the completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

/// Response body from the completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionResponse {
    /// Response ID
    id: Option<String>,
    /// Object type
    object: Option<String>,
    /// Creation timestamp
    created: Option<i64>,
    /// Model used
    model: Option<String>,
    /// Array of completion choices
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    /// Token usage statistics
    usage: Option<Usage>,
}

/// Single completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionChoice {
    /// Choice index
    index: Option<u32>,
    /// Stop reason
    finish_reason: Option<String>,
    /// Generated text
    text: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Usage {
    /// Number of prompt tokens
    prompt_tokens: u32,
    /// Number of completion tokens
    completion_tokens: u32,
    /// Total tokens
    total_tokens: u32,
}
