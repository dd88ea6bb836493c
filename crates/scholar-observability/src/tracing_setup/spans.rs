//! One span per pipeline stage. Spans nest under `pipeline_span!`.

/// Root span for one request.
#[macro_export]
macro_rules! pipeline_span {
    ($request_id:expr, $max_papers:expr) => {
        tracing::info_span!(
            "scholar.pipeline",
            request_id = %$request_id,
            max_papers = $max_papers
        )
    };
}

/// Source Gateway fetch.
#[macro_export]
macro_rules! fetch_span {
    ($primary:expr) => {
        tracing::info_span!("scholar.fetch", primary = %$primary)
    };
}

/// Relevance ranking.
#[macro_export]
macro_rules! ranking_span {
    ($candidates:expr) => {
        tracing::info_span!("scholar.ranking", candidates = $candidates)
    };
}

/// Summarization.
#[macro_export]
macro_rules! summarization_span {
    ($documents:expr) => {
        tracing::info_span!("scholar.summarization", documents = $documents)
    };
}

/// Confidence scoring.
#[macro_export]
macro_rules! scoring_span {
    ($documents:expr) => {
        tracing::info_span!("scholar.scoring", documents = $documents)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "scholar.pipeline";
    pub const FETCH: &str = "scholar.fetch";
    pub const RANKING: &str = "scholar.ranking";
    pub const SUMMARIZATION: &str = "scholar.summarization";
    pub const SCORING: &str = "scholar.scoring";
}
