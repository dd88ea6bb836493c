//! Primary/secondary fetch policy.

use std::sync::Arc;
use std::time::Duration;

use scholar_core::config::SourceConfig;
use scholar_core::constants::components;
use scholar_core::errors::{ScholarResult, SourceError};
use scholar_core::models::{DegradationEvent, Document, Origin};
use scholar_core::traits::IDocumentSource;
use tracing::{debug, info, warn};

use crate::http;
use crate::semantic_scholar::SemanticScholarClient;
use crate::wikipedia::WikipediaClient;

/// An upstream tagged with the role it plays in the fallback policy.
#[derive(Clone)]
pub enum SourceClient {
    Primary(Arc<dyn IDocumentSource>),
    Secondary(Arc<dyn IDocumentSource>),
}

impl SourceClient {
    pub fn origin(&self) -> Origin {
        match self {
            Self::Primary(_) => Origin::Primary,
            Self::Secondary(_) => Origin::Fallback,
        }
    }

    pub fn name(&self) -> &str {
        self.source().name()
    }

    fn source(&self) -> &Arc<dyn IDocumentSource> {
        match self {
            Self::Primary(s) | Self::Secondary(s) => s,
        }
    }

    /// One bounded attempt. Unusable documents are dropped and the rest
    /// tagged with this client's origin.
    async fn fetch(
        &self,
        query: &str,
        limit: usize,
        timeout: Duration,
    ) -> Result<Vec<Document>, SourceError> {
        let search = self.source().search(query, limit);
        let raw = match tokio::time::timeout(timeout, search).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(SourceError::Timeout {
                    upstream: self.name().to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
        };
        let origin = self.origin();
        Ok(raw
            .into_iter()
            .filter(|d| d.is_usable())
            .map(|d| Document::from_raw(d, origin))
            .collect())
    }
}

/// Documents from one gateway call.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub documents: Vec<Document>,
    /// Which source the documents came from.
    pub origin: Origin,
    pub degradation: Vec<DegradationEvent>,
}

/// Fetches from the primary source, falling back to the secondary at most
/// once. Never retries, never races the two.
pub struct SourceGateway {
    primary: SourceClient,
    secondary: SourceClient,
    config: SourceConfig,
}

impl SourceGateway {
    pub fn new(
        primary: Arc<dyn IDocumentSource>,
        secondary: Arc<dyn IDocumentSource>,
        config: SourceConfig,
    ) -> Self {
        Self {
            primary: SourceClient::Primary(primary),
            secondary: SourceClient::Secondary(secondary),
            config,
        }
    }

    /// Gateway over Semantic Scholar and Wikipedia sharing one HTTP client.
    pub fn from_config(config: &SourceConfig) -> ScholarResult<Self> {
        let client = http::build_client(&config.user_agent)?;
        let primary = SemanticScholarClient::new(
            client.clone(),
            config.semantic_scholar_url.clone(),
            config.semantic_scholar_api_key.clone(),
        );
        let secondary = WikipediaClient::new(client, config.wikipedia_url.clone());
        Ok(Self::new(
            Arc::new(primary),
            Arc::new(secondary),
            config.clone(),
        ))
    }

    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    pub fn secondary_name(&self) -> &str {
        self.secondary.name()
    }

    /// Fetch candidates for `query`.
    ///
    /// # Errors
    /// `SourceError::Unavailable` when both sources fail.
    pub async fn fetch(&self, query: &str, max_papers: usize) -> ScholarResult<FetchOutcome> {
        let limit = self.config.fetch_limit(max_papers);
        let primary_timeout = Duration::from_millis(self.config.primary_timeout_ms);
        let secondary_timeout = Duration::from_millis(self.config.secondary_timeout_ms);

        let primary_failure = match self.primary.fetch(query, limit, primary_timeout).await {
            Ok(documents) if !documents.is_empty() => {
                debug!(
                    source = self.primary.name(),
                    count = documents.len(),
                    "primary source answered"
                );
                return Ok(FetchOutcome {
                    documents,
                    origin: Origin::Primary,
                    degradation: Vec::new(),
                });
            }
            Ok(_) => {
                info!(
                    source = self.primary.name(),
                    "primary source returned no documents, consulting secondary"
                );
                None
            }
            Err(e) => {
                warn!(
                    source = self.primary.name(),
                    error = %e,
                    rate_limited = e.is_rate_limited(),
                    "primary source failed, falling back"
                );
                Some(e)
            }
        };

        match self.secondary.fetch(query, limit, secondary_timeout).await {
            Ok(documents) if primary_failure.is_some() || !documents.is_empty() => {
                let failure = primary_failure
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| format!("{} returned no documents", self.primary.name()));
                Ok(FetchOutcome {
                    documents,
                    origin: Origin::Fallback,
                    degradation: vec![DegradationEvent::now(
                        components::SOURCES,
                        failure,
                        self.secondary.name(),
                    )],
                })
            }
            Ok(_) => Ok(FetchOutcome {
                documents: Vec::new(),
                origin: Origin::Primary,
                degradation: Vec::new(),
            }),
            Err(secondary_err) => match primary_failure {
                Some(primary_err) => {
                    warn!(
                        source = self.secondary.name(),
                        error = %secondary_err,
                        "secondary source failed, no data available"
                    );
                    Err(SourceError::Unavailable {
                        primary: primary_err.to_string(),
                        secondary: secondary_err.to_string(),
                    }
                    .into())
                }
                None => {
                    debug!(
                        source = self.secondary.name(),
                        error = %secondary_err,
                        "secondary failed after empty primary answer"
                    );
                    Ok(FetchOutcome {
                        documents: Vec::new(),
                        origin: Origin::Primary,
                        degradation: Vec::new(),
                    })
                }
            },
        }
    }
}
