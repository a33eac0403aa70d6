//! Structured JSON extraction from free-form model output
//!
//! Local models asked to "respond in JSON" routinely wrap the payload in a
//! markdown fence, prepend prose, or return something that is not JSON at
//! all. This module pulls the structured part out on a best-effort basis:
//! extraction either fully succeeds or signals absence, and malformed
//! output is an expected outcome rather than an error.
//!
//! # Example
//!
//! ```
//! use lmsieve::extract::extract_json;
//! use serde_json::json;
//!
//! let text = "Here you go:\n```json\n{\"emails\": [\"a@b.com\"]}\n```";
//! assert_eq!(
//!     extract_json(text),
//!     Some(json!({"emails": ["a@b.com"]}))
//! );
//!
//! assert_eq!(extract_json("not json at all"), None);
//! ```

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

/// Extracts an embedded JSON document from `text`
///
/// Looks for the first ```` ```json … ``` ```` fence; if none exists the
/// entire input is treated as the candidate. The candidate is trimmed and
/// parsed, and any JSON shape (object, array, scalar, null) is accepted.
///
/// Returns `None` when the candidate does not parse. A fenced block that
/// holds invalid JSON never falls back to the surrounding text — fallback
/// only happens when no fence is present at all. Callers must check for
/// `None` before use; silent failure is part of the contract.
pub fn extract_json(text: &str) -> Option<Value> {
    let fence = Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap();

    let candidate = match fence.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => {
            debug!("Found fenced JSON block ({} chars)", inner.as_str().len());
            inner.as_str()
        }
        None => {
            debug!("No fenced JSON block, treating entire text as candidate");
            text
        }
    };

    match serde_json::from_str(candidate.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Candidate is not valid JSON: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_fenced_object() {
        let text = "Sure, here is the data:\n```json\n{\"key\": \"value\"}\n```\nanything else?";
        assert_eq!(extract_json(text), Some(json!({"key": "value"})));
    }

    #[test]
    fn test_extract_fenced_array() {
        let text = "```json\n[\"a@example.com\", \"b@example.com\"]\n```";
        assert_eq!(
            extract_json(text),
            Some(json!(["a@example.com", "b@example.com"]))
        );
    }

    #[test]
    fn test_extract_bare_json_fallback() {
        assert_eq!(
            extract_json(r#"{"key": "value"}"#),
            Some(json!({"key": "value"}))
        );
    }

    #[test]
    fn test_extract_plain_text_is_absent() {
        assert_eq!(extract_json("not json at all"), None);
    }

    #[test]
    fn test_fence_whitespace_is_trimmed() {
        let text = "```json\n\n   {\"a\": 1}   \n\n```";
        assert_eq!(extract_json(text), Some(json!({"a": 1})));
    }

    #[test]
    fn test_invalid_fence_does_not_fall_back() {
        // The surrounding text would parse on its own, but a fence was
        // found, so its content is the only candidate.
        let text = "{\"outer\": true} ```json\nnot json\n``` {\"outer\": true}";
        assert_eq!(extract_json(text), None);
    }

    #[test]
    fn test_only_first_fence_is_used() {
        let text = "```json\n{\"first\": 1}\n```\n```json\n{\"second\": 2}\n```";
        assert_eq!(extract_json(text), Some(json!({"first": 1})));
    }

    #[test]
    fn test_untagged_fence_is_ignored() {
        // An untagged fence is not a JSON fence; the fallback path applies
        // and the full text (fences included) fails to parse.
        let text = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(text), None);
    }

    #[test]
    fn test_extract_scalar_values() {
        assert_eq!(extract_json("```json\n42\n```"), Some(json!(42)));
        assert_eq!(extract_json("```json\ntrue\n```"), Some(json!(true)));
        assert_eq!(extract_json("```json\nnull\n```"), Some(json!(null)));
        assert_eq!(extract_json("```json\n\"hi\"\n```"), Some(json!("hi")));
    }

    #[test]
    fn test_multiline_fenced_json() {
        let text = "```json\n{\n  \"a\": 1,\n  \"b\": [2, 3]\n}\n```";
        assert_eq!(extract_json(text), Some(json!({"a": 1, "b": [2, 3]})));
    }
}
