/// Scholar system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound on `max_papers`, regardless of configuration.
pub const MAX_PAPERS_HARD_CAP: usize = 50;

/// Hard upper bound on documents requested from a single upstream source.
pub const MAX_FETCH_HARD_CAP: usize = 100;

/// Scale of the user-facing quality score.
pub const QUALITY_SCALE: f64 = 10.0;

/// Author placeholder when a source lists no usable author names.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Component names used in degradation events.
pub mod components {
    pub const SOURCES: &str = "sources";
    pub const EMBEDDINGS: &str = "embeddings";
    pub const RANKING: &str = "ranking";
    pub const SUMMARIZATION: &str = "summarization";
    pub const CONFIDENCE: &str = "confidence";
}
