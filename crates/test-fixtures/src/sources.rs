//! Scripted `IDocumentSource` doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use scholar_core::errors::SourceError;
use scholar_core::models::RawDocument;
use scholar_core::traits::IDocumentSource;

/// Failure a scripted source reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    ServerError,
    Network,
    Parse,
}

#[derive(Debug, Clone)]
enum Script {
    Respond(Vec<RawDocument>),
    Fail(FailureKind),
    Stall(Duration, Vec<RawDocument>),
}

/// A source that answers from a script and counts every call.
#[derive(Debug)]
pub struct ScriptedSource {
    name: String,
    script: Script,
    calls: AtomicUsize,
    last_limit: AtomicUsize,
}

impl ScriptedSource {
    fn new(name: &str, script: Script) -> Self {
        Self {
            name: name.to_string(),
            script,
            calls: AtomicUsize::new(0),
            last_limit: AtomicUsize::new(0),
        }
    }

    /// Always returns `docs` (truncated to the requested limit).
    pub fn returning(name: &str, docs: Vec<RawDocument>) -> Self {
        Self::new(name, Script::Respond(docs))
    }

    /// Always returns nothing.
    pub fn empty(name: &str) -> Self {
        Self::new(name, Script::Respond(Vec::new()))
    }

    /// Always fails with `kind`.
    pub fn failing(name: &str, kind: FailureKind) -> Self {
        Self::new(name, Script::Fail(kind))
    }

    /// Sleeps for `delay` (tokio time) before returning `docs`.
    pub fn stalling(name: &str, delay: Duration, docs: Vec<RawDocument>) -> Self {
        Self::new(name, Script::Stall(delay, docs))
    }

    /// Number of `search` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `limit` passed to the most recent `search` call.
    pub fn last_limit(&self) -> usize {
        self.last_limit.load(Ordering::SeqCst)
    }

    fn failure(&self, kind: FailureKind) -> SourceError {
        let upstream = self.name.clone();
        match kind {
            FailureKind::RateLimited => SourceError::RateLimited { upstream },
            FailureKind::ServerError => SourceError::HttpStatus {
                upstream,
                status: 503,
            },
            FailureKind::Network => SourceError::Network {
                upstream,
                reason: "connection reset".to_string(),
            },
            FailureKind::Parse => SourceError::Parse {
                upstream,
                reason: "unexpected token".to_string(),
            },
        }
    }
}

#[async_trait]
impl IDocumentSource for ScriptedSource {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<RawDocument>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_limit.store(limit, Ordering::SeqCst);
        match &self.script {
            Script::Respond(docs) => Ok(docs.iter().take(limit).cloned().collect()),
            Script::Fail(kind) => Err(self.failure(*kind)),
            Script::Stall(delay, docs) => {
                tokio::time::sleep(*delay).await;
                Ok(docs.iter().take(limit).cloned().collect())
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls_and_limits() {
        let source = ScriptedSource::returning("s", crate::quantum_error_correction());
        let docs = source.search("q", 3).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(source.call_count(), 1);
        assert_eq!(source.last_limit(), 3);
    }

    #[tokio::test]
    async fn failing_source_reports_kind() {
        let source = ScriptedSource::failing("s", FailureKind::RateLimited);
        let err = source.search("q", 3).await.unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[tokio::test(start_paused = true)]
    async fn stalling_source_waits_on_tokio_clock() {
        let source = ScriptedSource::stalling("s", Duration::from_secs(35), Vec::new());
        let start = tokio::time::Instant::now();
        source.search("q", 1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(35));
    }
}
