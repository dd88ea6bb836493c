//! Wire contract for callers: request, response and error bodies.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use scholar_core::constants::QUALITY_SCALE;
use scholar_core::errors::{ErrorKind, ScholarError};
use scholar_core::models::{
    Document, Origin, PipelineResult, RankingMode, ResearchQuery, SummarizationMode,
};

fn default_max_papers() -> usize {
    scholar_core::config::defaults::DEFAULT_MAX_PAPERS
}

fn default_include_abstract() -> bool {
    true
}

/// Inbound research request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
    #[serde(default = "default_max_papers")]
    pub max_papers: usize,
    #[serde(default = "default_include_abstract")]
    pub include_abstract: bool,
    #[serde(default)]
    pub min_confidence: f64,
}

impl ResearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_papers: default_max_papers(),
            include_abstract: default_include_abstract(),
            min_confidence: 0.0,
        }
    }

    pub fn to_query(&self) -> ResearchQuery {
        ResearchQuery::new(self.query.clone())
            .with_max_papers(self.max_papers)
            .with_include_abstract(self.include_abstract)
            .with_min_confidence(self.min_confidence)
    }
}

/// One ranked source as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub url: String,
    pub citation_count: u64,
    pub venue: String,
    pub relevance_score: f64,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
}

impl SourceEntry {
    fn from_document(doc: &Document, include_abstract: bool) -> Self {
        Self {
            title: doc.title.clone(),
            authors: doc.authors.clone(),
            year: doc.year,
            url: doc.url.clone(),
            citation_count: doc.citation_count,
            venue: doc.venue.clone(),
            relevance_score: doc.relevance_score,
            abstract_text: include_abstract.then(|| doc.abstract_text.clone()),
        }
    }
}

/// Outbound body of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub summary: String,
    pub sources: Vec<SourceEntry>,
    pub confidence_score: f64,
    pub quality_score: f64,
    pub processing_time_seconds: f64,
    pub api_status: Origin,
    pub papers_analyzed: usize,
    pub summarization_mode: SummarizationMode,
    pub ranking_mode: RankingMode,
    pub below_threshold: bool,
    pub degraded: bool,
}

impl ResearchResponse {
    pub fn from_result(result: &PipelineResult, include_abstract: bool) -> Self {
        Self {
            summary: result.summary.text.clone(),
            sources: result
                .ranked
                .iter()
                .map(|d| SourceEntry::from_document(d, include_abstract))
                .collect(),
            confidence_score: result.confidence.confidence,
            quality_score: result.confidence.quality_score,
            processing_time_seconds: result.processing_time.as_secs_f64(),
            api_status: result.api_status,
            papers_analyzed: result.papers_analyzed(),
            summarization_mode: result.summarization_mode,
            ranking_mode: result.ranking_mode,
            below_threshold: result.below_threshold,
            degraded: result.is_degraded(),
        }
    }

    /// Quality on the 0 to 10 scale, rounded to one decimal for display.
    pub fn quality_display(&self) -> String {
        format!("{:.1}/{QUALITY_SCALE:.0}", self.quality_score)
    }
}

/// Outbound body of a failed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorKind,
    pub detail: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn from_error(error: &ScholarError) -> Self {
        Self {
            error: error.kind(),
            detail: error.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// HTTP status a web layer should answer with.
    pub fn status_code(&self) -> u16 {
        self.error.status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_core::models::PipelineState;

    #[test]
    fn request_defaults() {
        let req: ResearchRequest = serde_json::from_str(r#"{"query":"qec"}"#).unwrap();
        assert_eq!(req, ResearchRequest::new("qec"));
        let query = req.to_query();
        assert_eq!(query.max_papers(), scholar_core::config::defaults::DEFAULT_MAX_PAPERS);
        assert_eq!(query.max_papers(), ResearchQuery::new("qec").max_papers());
        assert!(query.include_abstract());
        assert!(!query.is_below_threshold(0.0));
    }

    #[test]
    fn error_body_carries_kind_and_timestamp() {
        let err = ScholarError::Timeout {
            budget_ms: 30_000,
            stage: PipelineState::Fetching,
        };
        let body = ErrorResponse::from_error(&err);
        assert_eq!(body.error, ErrorKind::Timeout);
        assert_eq!(body.status_code(), 504);
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Timeout");
    }
}
