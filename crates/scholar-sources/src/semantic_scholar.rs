//! Semantic Scholar Graph API adapter (primary source).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use scholar_core::constants::UNKNOWN_AUTHOR;
use scholar_core::errors::SourceError;
use scholar_core::models::RawDocument;
use scholar_core::text::{clean_inline, clean_text, extract_year};
use scholar_core::traits::IDocumentSource;
use serde::Deserialize;
use tracing::debug;

use crate::http;

pub const SEMANTIC_SCHOLAR: &str = "semantic-scholar";

const SEARCH_FIELDS: &str =
    "title,abstract,authors,year,url,citationCount,venue,publicationDate,externalIds";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResponse {
    data: Vec<Paper>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Paper {
    paper_id: Option<String>,
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    authors: Option<Vec<Author>>,
    year: Option<i32>,
    url: Option<String>,
    citation_count: Option<u64>,
    venue: Option<String>,
    publication_date: Option<String>,
    external_ids: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Author {
    name: Option<String>,
}

/// `GET {base}/paper/search` client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    http: Client,
    base: String,
    api_key: Option<String>,
}

impl SemanticScholarClient {
    pub fn new(http: Client, base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl IDocumentSource for SemanticScholarClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawDocument>, SourceError> {
        let url = format!("{}/paper/search", self.base);
        let limit = limit.to_string();
        let mut request = self.http.get(&url).query(&[
            ("query", query.trim()),
            ("limit", limit.as_str()),
            ("fields", SEARCH_FIELDS),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| http::transport_error(SEMANTIC_SCHOLAR, e))?;
        http::check_status(SEMANTIC_SCHOLAR, &response)?;
        let body: SearchResponse = http::read_json(SEMANTIC_SCHOLAR, response).await?;
        Ok(convert(body))
    }

    fn name(&self) -> &str {
        SEMANTIC_SCHOLAR
    }
}

/// Parse a `/paper/search` response body.
pub fn parse_search_response(body: &str) -> Result<Vec<RawDocument>, SourceError> {
    let response: SearchResponse = http::parse_json(SEMANTIC_SCHOLAR, body)?;
    Ok(convert(response))
}

fn convert(response: SearchResponse) -> Vec<RawDocument> {
    let received = response.data.len();
    let documents: Vec<RawDocument> = response.data.into_iter().filter_map(parse_paper).collect();
    debug!(
        received,
        kept = documents.len(),
        "parsed semantic scholar results"
    );
    documents
}

/// Papers without a title or abstract are skipped.
fn parse_paper(paper: Paper) -> Option<RawDocument> {
    let title = clean_inline(paper.title.as_deref().unwrap_or_default());
    let text = clean_text(paper.abstract_text.as_deref().unwrap_or_default());
    if title.is_empty() || text.is_empty() {
        return None;
    }

    let mut authors: Vec<String> = paper
        .authors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| a.name)
        .map(|n| clean_inline(&n))
        .filter(|n| !n.is_empty() && !n.eq_ignore_ascii_case("unknown"))
        .collect();
    if authors.is_empty() {
        authors.push(UNKNOWN_AUTHOR.to_string());
    }

    let doi = paper
        .external_ids
        .as_ref()
        .and_then(|ids| ids.get("DOI"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let url = match paper.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(u) => u.to_string(),
        None => match (doi, paper.paper_id.as_deref()) {
            (Some(doi), _) => format!("https://doi.org/{doi}"),
            (None, Some(id)) if !id.is_empty() => {
                format!("https://www.semanticscholar.org/paper/{id}")
            }
            _ => String::new(),
        },
    };

    let year = paper
        .year
        .or_else(|| paper.publication_date.as_deref().and_then(extract_year));

    Some(RawDocument {
        title,
        authors,
        year,
        venue: clean_inline(paper.venue.as_deref().unwrap_or_default()),
        citation_count: paper.citation_count.unwrap_or(0),
        url,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RawDocument> {
        parse_search_response(json).unwrap()
    }

    #[test]
    fn skips_papers_without_title_or_abstract() {
        let docs = parse(
            r#"{"data": [
                {"title": "T", "abstract": null},
                {"title": "", "abstract": "A"},
                {"title": "Kept", "abstract": "Has text"}
            ]}"#,
        );
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Kept");
        assert_eq!(docs[0].text, "Has text.");
    }

    #[test]
    fn doi_fills_missing_url() {
        let docs = parse(
            r#"{"data": [{"title": "T", "abstract": "A", "url": "",
                "externalIds": {"DOI": "10.1/x", "CorpusId": 7}}]}"#,
        );
        assert_eq!(docs[0].url, "https://doi.org/10.1/x");
    }

    #[test]
    fn paper_id_fills_url_when_no_doi() {
        let docs = parse(r#"{"data": [{"paperId": "abc", "title": "T", "abstract": "A"}]}"#);
        assert_eq!(docs[0].url, "https://www.semanticscholar.org/paper/abc");
    }

    #[test]
    fn year_falls_back_to_publication_date() {
        let docs = parse(
            r#"{"data": [{"title": "T", "abstract": "A", "year": null,
                "publicationDate": "2015-04-01"}]}"#,
        );
        assert_eq!(docs[0].year, Some(2015));
    }

    #[test]
    fn unknown_year_stays_unknown() {
        let docs = parse(r#"{"data": [{"title": "T", "abstract": "A"}]}"#);
        assert_eq!(docs[0].year, None);
    }

    #[test]
    fn unknown_authors_are_dropped() {
        let docs = parse(
            r#"{"data": [{"title": "T", "abstract": "A",
                "authors": [{"name": "Unknown"}, {"name": " Ada  Lovelace "}]}]}"#,
        );
        assert_eq!(docs[0].authors, ["Ada Lovelace"]);

        let docs = parse(r#"{"data": [{"title": "T", "abstract": "A", "authors": []}]}"#);
        assert_eq!(docs[0].authors, [UNKNOWN_AUTHOR]);
    }

    #[test]
    fn missing_data_is_empty_not_error() {
        assert!(parse("{}").is_empty());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_search_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
