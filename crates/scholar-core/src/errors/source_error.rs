/// Source Gateway errors. `upstream` names the source that failed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{upstream} rate limited the request")]
    RateLimited { upstream: String },

    #[error("{upstream} did not answer within {timeout_ms}ms")]
    Timeout { upstream: String, timeout_ms: u64 },

    #[error("{upstream} returned HTTP {status}")]
    HttpStatus { upstream: String, status: u16 },

    #[error("{upstream} network error: {reason}")]
    Network { upstream: String, reason: String },

    #[error("{upstream} response could not be parsed: {reason}")]
    Parse { upstream: String, reason: String },

    #[error("all sources unavailable (primary: {primary}; secondary: {secondary})")]
    Unavailable { primary: String, secondary: String },
}

impl SourceError {
    /// Whether the upstream signalled throttling rather than failure.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
