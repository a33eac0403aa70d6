//! Availability prober integration tests
//!
//! Exercises the full probe sequence against a canned-response listener:
//! liveness failures, listing failures, malformed listings, missing models,
//! and the success path.

mod support;

use lmsieve::probe::{ProbeError, ServerProbe};
use std::time::Duration;
use support::http::{serve_json, serve_responses, unreachable_url};

fn probe(base_url: String) -> ServerProbe {
    ServerProbe::with_timeout(base_url, Duration::from_secs(2))
}

#[test]
fn probe_succeeds_when_model_is_listed() {
    let url = serve_json(vec![
        "{}",
        r#"{"data": [{"id": "phi-3.1-mini-128k-instruct", "object": "model"}]}"#,
    ]);

    probe(url)
        .check_model("phi-3.1-mini-128k-instruct")
        .expect("probe should succeed");
}

#[test]
fn unreachable_server_fails_before_listing() {
    // The listener behind this URL is gone; the liveness step must fail
    // and the probe must never reach the /models call.
    let err = probe(unreachable_url())
        .check_model("phi-3.1-mini-128k-instruct")
        .unwrap_err();

    assert!(
        matches!(err, ProbeError::Unreachable { .. }),
        "expected Unreachable, got: {err:?}"
    );
}

#[test]
fn liveness_http_error_is_unreachable() {
    let url = serve_responses(vec![(503, "busy".to_string())]);

    let err = probe(url).check_model("any").unwrap_err();
    match err {
        ProbeError::Unreachable { message, .. } => assert!(message.contains("503")),
        other => panic!("expected Unreachable, got: {other:?}"),
    }
}

#[test]
fn listing_http_error_is_distinct_from_liveness_failure() {
    let url = serve_responses(vec![(200, "{}".to_string()), (500, "oops".to_string())]);

    let err = probe(url).check_model("any").unwrap_err();
    match err {
        ProbeError::ListingFailed { url, message } => {
            assert!(url.ends_with("/models"));
            assert!(message.contains("500"));
        }
        other => panic!("expected ListingFailed, got: {other:?}"),
    }
}

#[test]
fn listing_body_must_be_json() {
    let url = serve_json(vec!["{}", "this is not json"]);

    let err = probe(url).check_model("any").unwrap_err();
    assert!(matches!(err, ProbeError::MalformedListing(_)));
}

#[test]
fn listing_without_data_key_is_malformed() {
    let url = serve_json(vec!["{}", r#"{"models": ["a", "b"]}"#]);

    let err = probe(url).check_model("any").unwrap_err();
    assert!(matches!(err, ProbeError::MalformedListing(_)));
}

#[test]
fn missing_model_reports_the_discovered_set() {
    let url = serve_json(vec![
        "{}",
        r#"{"data": [{"id": "model-a"}, {"id": "model-b"}]}"#,
    ]);

    let err = probe(url).check_model("model-c").unwrap_err();
    match err {
        ProbeError::ModelNotFound {
            requested,
            available,
        } => {
            assert_eq!(requested, "model-c");
            assert_eq!(available, vec!["model-a", "model-b"]);
        }
        other => panic!("expected ModelNotFound, got: {other:?}"),
    }
}

#[test]
fn entries_without_id_are_silently_skipped() {
    let url = serve_json(vec![
        "{}",
        r#"{"data": [{"object": "model"}, {"id": "the-model"}]}"#,
    ]);

    probe(url)
        .check_model("the-model")
        .expect("entries without id must not break the probe");
}

#[test]
fn empty_listing_yields_empty_available_set() {
    let url = serve_json(vec!["{}", r#"{"data": []}"#]);

    let err = probe(url).check_model("anything").unwrap_err();
    match err {
        ProbeError::ModelNotFound { available, .. } => assert!(available.is_empty()),
        other => panic!("expected ModelNotFound, got: {other:?}"),
    }
}
