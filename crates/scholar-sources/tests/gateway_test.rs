use std::sync::Arc;
use std::time::Duration;

use scholar_core::config::SourceConfig;
use scholar_core::errors::{ErrorKind, ScholarError, SourceError};
use scholar_core::models::{Origin, RawDocument};
use scholar_sources::semantic_scholar::SEMANTIC_SCHOLAR;
use scholar_sources::wikipedia::WIKIPEDIA;
use scholar_sources::SourceGateway;
use test_fixtures::{quantum_error_correction, wikipedia_quantum, FailureKind, ScriptedSource};

fn gateway(primary: &Arc<ScriptedSource>, secondary: &Arc<ScriptedSource>) -> SourceGateway {
    SourceGateway::new(primary.clone(), secondary.clone(), SourceConfig::default())
}

#[tokio::test]
async fn healthy_primary_never_touches_secondary() {
    let primary = Arc::new(ScriptedSource::returning("s2", quantum_error_correction()));
    let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Primary);
    assert_eq!(outcome.documents.len(), 5);
    assert!(outcome.documents.iter().all(|d| d.origin == Origin::Primary));
    assert!(outcome.degradation.is_empty());
    assert_eq!(secondary.call_count(), 0);
}

#[tokio::test]
async fn requests_overfetch_headroom() {
    let primary = Arc::new(ScriptedSource::returning("s2", quantum_error_correction()));
    let secondary = Arc::new(ScriptedSource::empty("wiki"));
    gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(primary.last_limit(), 10);

    gateway(&primary, &secondary).fetch("qec", 40).await.unwrap();
    assert_eq!(primary.last_limit(), 50);
}

#[tokio::test]
async fn rate_limited_primary_falls_back_once() {
    let primary = Arc::new(ScriptedSource::failing("s2", FailureKind::RateLimited));
    let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Fallback);
    assert_eq!(outcome.documents.len(), 2);
    assert!(outcome.documents.iter().all(|d| d.origin == Origin::Fallback));
    assert_eq!(outcome.degradation.len(), 1);
    assert_eq!(outcome.degradation[0].component, "sources");
    assert_eq!(outcome.degradation[0].fallback_used, "wiki");
    assert!(outcome.degradation[0].failure.contains("rate limited"));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(secondary.call_count(), 1);
}

#[tokio::test]
async fn every_primary_failure_kind_falls_back() {
    for kind in [
        FailureKind::RateLimited,
        FailureKind::ServerError,
        FailureKind::Network,
        FailureKind::Parse,
    ] {
        let primary = Arc::new(ScriptedSource::failing("s2", kind));
        let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));
        let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
        assert_eq!(outcome.origin, Origin::Fallback, "{kind:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn slow_primary_times_out_and_falls_back() {
    let primary = Arc::new(ScriptedSource::stalling(
        "s2",
        Duration::from_secs(60),
        quantum_error_correction(),
    ));
    let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Fallback);
    assert!(outcome.degradation[0].failure.contains("10000ms"));
}

#[tokio::test]
async fn both_failing_is_unavailable() {
    let primary = Arc::new(ScriptedSource::failing("s2", FailureKind::ServerError));
    let secondary = Arc::new(ScriptedSource::failing("wiki", FailureKind::Network));

    let err = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap_err();
    assert!(matches!(
        err,
        ScholarError::Source(SourceError::Unavailable { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::NoDataAvailable);
    assert_eq!(secondary.call_count(), 1);
}

#[tokio::test]
async fn empty_primary_consults_secondary() {
    let primary = Arc::new(ScriptedSource::empty("s2"));
    let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Fallback);
    assert_eq!(outcome.documents.len(), 2);
    assert!(outcome.degradation[0].failure.contains("no documents"));
}

#[tokio::test]
async fn empty_primary_and_failing_secondary_is_empty_success() {
    let primary = Arc::new(ScriptedSource::empty("s2"));
    let secondary = Arc::new(ScriptedSource::failing("wiki", FailureKind::Network));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Primary);
    assert!(outcome.documents.is_empty());
    assert!(outcome.degradation.is_empty());
}

#[tokio::test]
async fn unusable_documents_are_dropped() {
    let mut docs = quantum_error_correction();
    docs[0].text.clear();
    docs[1].title = "   ".to_string();
    let primary = Arc::new(ScriptedSource::returning("s2", docs));
    let secondary = Arc::new(ScriptedSource::empty("wiki"));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.documents.len(), 3);
}

#[tokio::test]
async fn papers_without_url_are_dropped_before_ranking() {
    let docs: Vec<RawDocument> = ["Surface code", "Color code", "Bosonic code"]
        .iter()
        .map(|title| RawDocument {
            title: title.to_string(),
            text: format!("{title} protects logical qubits."),
            url: String::new(),
            ..Default::default()
        })
        .collect();
    let primary = Arc::new(ScriptedSource::returning("s2", docs));
    let secondary = Arc::new(ScriptedSource::returning("wiki", wikipedia_quantum()));

    let outcome = gateway(&primary, &secondary).fetch("qec", 5).await.unwrap();
    assert_eq!(outcome.origin, Origin::Fallback);
    assert_eq!(outcome.documents.len(), 2);
    assert!(outcome.documents.iter().all(|d| !d.url.is_empty()));
    assert!(outcome.degradation[0].failure.contains("no documents"));
}

#[test]
fn default_config_builds_both_http_sources() {
    let gateway = SourceGateway::from_config(&SourceConfig::default()).unwrap();
    assert_eq!(gateway.primary_name(), SEMANTIC_SCHOLAR);
    assert_eq!(gateway.secondary_name(), WIKIPEDIA);
}
