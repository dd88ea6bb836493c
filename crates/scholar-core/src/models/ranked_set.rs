use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use super::Document;

/// Documents ordered by relevance, at most `max_papers` long.
///
/// Invariants, enforced by [`RankedSet::from_scored`]:
/// - every `relevance_score` is in [0.0, 1.0];
/// - sorted by [`rank_order`];
/// - no two documents share a `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedSet {
    documents: Vec<Document>,
}

/// Total order used for ranking: relevance desc, citations desc, url asc.
pub fn rank_order(a: &Document, b: &Document) -> Ordering {
    b.relevance_score
        .total_cmp(&a.relevance_score)
        .then_with(|| b.citation_count.cmp(&a.citation_count))
        .then_with(|| a.url.cmp(&b.url))
}

impl RankedSet {
    /// Build a ranked set from scored documents.
    ///
    /// Scores are clamped, documents sorted, duplicate urls dropped (the
    /// better-ranked copy wins) and the result truncated to `max_papers`.
    pub fn from_scored(documents: Vec<Document>, max_papers: usize) -> Self {
        let mut documents: Vec<Document> = documents
            .into_iter()
            .map(|d| {
                let score = d.relevance_score;
                d.with_relevance(score)
            })
            .collect();
        documents.sort_by(rank_order);

        // An empty url identifies nothing, so it never marks a duplicate.
        let mut seen = HashSet::new();
        documents.retain(|d| d.url.trim().is_empty() || seen.insert(d.url.clone()));
        documents.truncate(max_papers);

        Self { documents }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.documents.iter().any(|d| d.url == url)
    }

    pub fn get(&self, url: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.url == url)
    }
}

impl<'a> IntoIterator for &'a RankedSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Origin, RawDocument};

    fn doc(url: &str, score: f64, citations: u64) -> Document {
        Document::from_raw(
            RawDocument {
                title: url.to_string(),
                url: url.to_string(),
                text: "text".to_string(),
                citation_count: citations,
                ..Default::default()
            },
            Origin::Primary,
        )
        .with_relevance(score)
    }

    #[test]
    fn sorts_by_score_then_citations_then_url() {
        let set = RankedSet::from_scored(
            vec![
                doc("c", 0.5, 1),
                doc("b", 0.5, 1),
                doc("a", 0.5, 9),
                doc("d", 0.9, 0),
            ],
            10,
        );
        let urls: Vec<_> = set.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, ["d", "a", "b", "c"]);
    }

    #[test]
    fn clamps_out_of_range_scores() {
        let mut high = doc("x", 0.0, 0);
        high.relevance_score = 3.0;
        let mut nan = doc("y", 0.0, 0);
        nan.relevance_score = f64::NAN;
        let set = RankedSet::from_scored(vec![high, nan], 10);
        assert_eq!(set.documents()[0].relevance_score, 1.0);
        assert_eq!(set.documents()[1].relevance_score, 0.0);
    }

    #[test]
    fn papers_without_url_are_not_merged() {
        let docs = ["Surface code", "Color code", "Bosonic code"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let mut d = doc("", 0.9 - i as f64 * 0.1, 10);
                d.title = title.to_string();
                d
            })
            .collect();
        let set = RankedSet::from_scored(docs, 10);
        let titles: Vec<_> = set.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Surface code", "Color code", "Bosonic code"]);
    }

    #[test]
    fn dedups_by_url_keeping_best() {
        let set = RankedSet::from_scored(vec![doc("a", 0.2, 0), doc("a", 0.8, 0)], 10);
        assert_eq!(set.len(), 1);
        assert_eq!(set.documents()[0].relevance_score, 0.8);
    }

    #[test]
    fn truncates_to_max_papers() {
        let docs = (0..20).map(|i| doc(&format!("u{i}"), 0.5, i)).collect();
        let set = RankedSet::from_scored(docs, 3);
        assert_eq!(set.len(), 3);
        assert_eq!(set.documents()[0].citation_count, 19);
    }
}
