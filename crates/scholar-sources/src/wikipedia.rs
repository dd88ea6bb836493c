//! MediaWiki search adapter (secondary source).

use async_trait::async_trait;
use reqwest::Client;
use scholar_core::errors::SourceError;
use scholar_core::models::RawDocument;
use scholar_core::text::{clean_inline, clean_text};
use scholar_core::traits::IDocumentSource;
use serde::Deserialize;

use crate::http;

pub const WIKIPEDIA: &str = "wikipedia";
pub const WIKIPEDIA_VENUE: &str = "Wikipedia";
pub const WIKIPEDIA_AUTHOR: &str = "Wikipedia contributors";

/// MediaWiki caps intro extracts per request at 20.
const MAX_EXTRACTS: usize = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryResponse {
    query: Option<QueryPages>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryPages {
    pages: Vec<Page>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Page {
    title: String,
    index: Option<u32>,
    extract: Option<String>,
    fullurl: Option<String>,
}

/// `action=query&generator=search` client returning intro extracts.
#[derive(Clone)]
pub struct WikipediaClient {
    http: Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl IDocumentSource for WikipediaClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawDocument>, SourceError> {
        let limit = limit.clamp(1, MAX_EXTRACTS).to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("generator", "search"),
                ("gsrsearch", query.trim()),
                ("gsrlimit", limit.as_str()),
                ("prop", "extracts|info"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("exlimit", "max"),
                ("inprop", "url"),
            ])
            .send()
            .await
            .map_err(|e| http::transport_error(WIKIPEDIA, e))?;
        http::check_status(WIKIPEDIA, &response)?;
        let body: QueryResponse = http::read_json(WIKIPEDIA, response).await?;
        Ok(convert(body))
    }

    fn name(&self) -> &str {
        WIKIPEDIA
    }
}

/// Parse a `generator=search` response body.
pub fn parse_search_response(body: &str) -> Result<Vec<RawDocument>, SourceError> {
    let response: QueryResponse = http::parse_json(WIKIPEDIA, body)?;
    Ok(convert(response))
}

/// Pages come back keyed by page id; `index` restores search order.
fn convert(response: QueryResponse) -> Vec<RawDocument> {
    let mut pages = response.query.map(|q| q.pages).unwrap_or_default();
    pages.sort_by_key(|p| p.index.unwrap_or(u32::MAX));
    pages
        .into_iter()
        .filter_map(|page| {
            let title = clean_inline(&page.title);
            let text = clean_text(page.extract.as_deref().unwrap_or_default());
            if title.is_empty() || text.is_empty() {
                return None;
            }
            let url = page.fullurl.unwrap_or_else(|| {
                format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"))
            });
            Some(RawDocument {
                title,
                authors: vec![WIKIPEDIA_AUTHOR.to_string()],
                year: None,
                venue: WIKIPEDIA_VENUE.to_string(),
                citation_count: 0,
                url,
                text,
            })
        })
        .collect()
}
