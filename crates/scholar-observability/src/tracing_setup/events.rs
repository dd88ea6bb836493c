//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

use std::time::Duration;

use scholar_core::models::PipelineState;

/// A subsystem fell back to a lower-quality mode.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// The orchestrator moved a request to a new state.
pub fn stage_transition(from: PipelineState, to: PipelineState) {
    tracing::debug!(
        event = "stage_transition",
        from = from.as_str(),
        to = to.as_str(),
        "stage transition"
    );
}

/// A request was answered from the result cache.
pub fn cache_hit(query: &str, max_papers: usize) {
    tracing::info!(
        event = "cache_hit",
        query = %query,
        max_papers = max_papers,
        "result served from cache"
    );
}

/// A request completed.
pub fn pipeline_completed(papers: usize, confidence: f64, degraded: bool, elapsed: Duration) {
    tracing::info!(
        event = "pipeline_completed",
        papers = papers,
        confidence = confidence,
        degraded = degraded,
        elapsed_ms = elapsed.as_millis() as u64,
        "pipeline completed"
    );
}

/// A request failed.
pub fn pipeline_failed(kind: &str, stage: PipelineState, detail: &str) {
    tracing::warn!(
        event = "pipeline_failed",
        kind = %kind,
        stage = stage.as_str(),
        detail = %detail,
        "pipeline failed"
    );
}
