//! Server availability probing for local LLM inference servers
//!
//! This module verifies that an OpenAI-compatible inference server (such as
//! LM Studio) is reachable and that a named model appears in its `/models`
//! listing. The probe is a pure go/no-go gate: it performs exactly two
//! requests, never retries, and holds no state between calls.
//!
//! # Example
//!
//! ```no_run
//! use lmsieve::probe::ServerProbe;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let probe = ServerProbe::with_timeout(
//!     "http://127.0.0.1:1234/v1".to_string(),
//!     Duration::from_secs(3),
//! );
//!
//! probe.check_model("phi-3.1-mini-128k-instruct")?;
//! println!("Model is available");
//! # Ok(())
//! # }
//! ```

use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default timeout for probe requests
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 3;

/// Model-listing endpoint, relative to the server base URL
const MODELS_PATH: &str = "/models";

/// Errors produced by a failed availability probe
///
/// The variants keep "server down" ([`ProbeError::Unreachable`]) distinct
/// from "server up but the listing query broke"
/// ([`ProbeError::ListingFailed`]) so callers can tell the two apart.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The base URL did not answer with a success status
    #[error("Cannot connect to server at {url}: {message}")]
    Unreachable { url: String, message: String },

    /// The server is live but the model listing could not be queried
    #[error("Failed to query model listing at {url}: {message}")]
    ListingFailed { url: String, message: String },

    /// The listing response body violates the expected shape
    #[error("Malformed model listing: {0}")]
    MalformedListing(String),

    /// The listing is well-formed but does not contain the requested model
    #[error("Model '{requested}' is not available. Available models: {available:?}")]
    ModelNotFound {
        requested: String,
        available: Vec<String>,
    },
}

/// Availability prober for an OpenAI-compatible inference server
///
/// Holds a base URL and a short-timeout HTTP client; each call to
/// [`ServerProbe::check_model`] opens and completes its own exchange.
pub struct ServerProbe {
    /// Server base URL (e.g., "http://127.0.0.1:1234/v1")
    base_url: String,

    /// HTTP client configured with the probe timeout
    http_client: Client,

    /// Per-request timeout
    timeout: Duration,
}

impl ServerProbe {
    /// Creates a prober with the default 3 second timeout
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS))
    }

    /// Creates a prober with a custom per-request timeout
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url,
            http_client,
            timeout,
        }
    }

    /// Verifies the server is live and hosts `model`
    ///
    /// Runs the probe steps in order, each a precondition for the next:
    /// a liveness GET against the base URL, a GET against the `/models`
    /// sub-resource, a shape check on the listing body, and finally a
    /// membership check for `model` among the advertised ids.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's [`ProbeError`]. On
    /// [`ProbeError::ModelNotFound`] the full set of discovered model ids
    /// is included for diagnostics.
    pub fn check_model(&self, model: &str) -> Result<(), ProbeError> {
        self.check_liveness()?;
        let listing = self.fetch_listing()?;
        let available = model_ids(&listing)?;

        if !available.iter().any(|id| id == model) {
            warn!(
                "Model '{}' not found among {} advertised models",
                model,
                available.len()
            );
            return Err(ProbeError::ModelNotFound {
                requested: model.to_string(),
                available,
            });
        }

        info!("Model '{}' is available at {}", model, self.base_url);
        Ok(())
    }

    /// Step 1: a generic GET against the base URL to confirm it is listening
    fn check_liveness(&self) -> Result<(), ProbeError> {
        debug!("Checking server liveness at {}", self.base_url);

        let response = self
            .http_client
            .get(&self.base_url)
            .send()
            .map_err(|e| ProbeError::Unreachable {
                url: self.base_url.clone(),
                message: request_failure_message(&e, self.timeout),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Unreachable {
                url: self.base_url.clone(),
                message: format!("HTTP {}", status),
            });
        }

        debug!("Server at {} is live", self.base_url);
        Ok(())
    }

    /// Step 2 and 3: query the model listing and parse it as JSON
    fn fetch_listing(&self) -> Result<Value, ProbeError> {
        let url = format!("{}{}", self.base_url, MODELS_PATH);

        debug!("Querying model listing at {}", url);

        let response =
            self.http_client
                .get(&url)
                .send()
                .map_err(|e| ProbeError::ListingFailed {
                    url: url.clone(),
                    message: request_failure_message(&e, self.timeout),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::ListingFailed {
                url,
                message: format!("HTTP {}", status),
            });
        }

        response
            .json::<Value>()
            .map_err(|e| ProbeError::MalformedListing(format!("invalid JSON body: {}", e)))
    }
}

impl fmt::Debug for ServerProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerProbe")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Renders a transport-level failure the way the error taxonomy reports it
fn request_failure_message(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        format!("timed out after {:?}", timeout)
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        format!("request failed: {}", error)
    }
}

/// Extracts the advertised model ids from a parsed listing body
///
/// The listing must hold a list under the top-level `"data"` key. Entries
/// lacking a string `"id"` field are silently skipped rather than treated
/// as malformed; LM Studio has been observed to list partially-described
/// entries and the lenient behavior is intentional.
pub fn model_ids(listing: &Value) -> Result<Vec<String>, ProbeError> {
    let data = listing
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ProbeError::MalformedListing(
                "response did not contain 'data' as a list".to_string(),
            )
        })?;

    Ok(data
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}
