//! TF-IDF cosine ranking over the candidate corpus.
//!
//! IDF is smoothed: `ln((N + 1) / (df + 1)) + 1`. Stopwords are removed.
//! All accumulation iterates `BTreeMap`s so scores are bit-reproducible.

use std::collections::BTreeMap;

use scholar_core::models::Document;
use scholar_core::text::content_terms;

pub const LEXICAL_NAME: &str = "lexical-tfidf";

type SparseVector = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker;

impl LexicalRanker {
    /// Score every document against `query`. Scores are in [0.0, 1.0].
    pub fn score(&self, query: &str, documents: &[Document]) -> Vec<f64> {
        let corpus: Vec<Vec<String>> = documents
            .iter()
            .map(|d| content_terms(&d.ranking_text()))
            .collect();
        let idf = inverse_document_frequency(&corpus);

        let query_vec = weigh(&content_terms(query), &idf, corpus.len());
        corpus
            .iter()
            .map(|terms| cosine(&query_vec, &weigh(terms, &idf, corpus.len())))
            .collect()
    }
}

fn inverse_document_frequency(corpus: &[Vec<String>]) -> BTreeMap<String, f64> {
    let mut df: BTreeMap<String, usize> = BTreeMap::new();
    for terms in corpus {
        let mut seen: Vec<&String> = terms.iter().collect();
        seen.sort();
        seen.dedup();
        for term in seen {
            *df.entry(term.clone()).or_default() += 1;
        }
    }
    let n = corpus.len() as f64;
    df.into_iter()
        .map(|(term, count)| (term, smoothed_idf(n, count as f64)))
        .collect()
}

fn smoothed_idf(n: f64, df: f64) -> f64 {
    ((n + 1.0) / (df + 1.0)).ln() + 1.0
}

/// Term frequency × IDF. Terms unseen in the corpus get `df = 0`.
fn weigh(terms: &[String], idf: &BTreeMap<String, f64>, corpus_size: usize) -> SparseVector {
    let mut tf: SparseVector = BTreeMap::new();
    for term in terms {
        *tf.entry(term.clone()).or_default() += 1.0;
    }
    let len = terms.len().max(1) as f64;
    let unseen = smoothed_idf(corpus_size as f64, 0.0);
    for (term, weight) in tf.iter_mut() {
        *weight = (*weight / len) * idf.get(term).copied().unwrap_or(unseen);
    }
    tf
}

fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_core::models::{Origin, RawDocument};

    fn doc(title: &str, text: &str) -> Document {
        Document::from_raw(
            RawDocument {
                title: title.to_string(),
                text: text.to_string(),
                url: title.to_string(),
                ..Default::default()
            },
            Origin::Primary,
        )
    }

    #[test]
    fn idf_is_smoothed() {
        assert!((smoothed_idf(3.0, 3.0) - 1.0).abs() < 1e-12);
        assert!(smoothed_idf(3.0, 1.0) > smoothed_idf(3.0, 2.0));
    }

    #[test]
    fn matching_document_outranks_unrelated() {
        let docs = vec![
            doc("Surface codes", "Quantum error correction with surface codes."),
            doc("Sourdough", "Fermentation of bread dough."),
        ];
        let scores = LexicalRanker.score("quantum error correction", &docs);
        assert!(scores[0] > 0.0);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn stopword_only_query_scores_zero() {
        let docs = vec![doc("Surface codes", "The theory of the code.")];
        assert_eq!(LexicalRanker.score("the of and", &docs), [0.0]);
    }

    #[test]
    fn scores_are_reproducible() {
        let docs = vec![
            doc("A", "alpha beta gamma delta"),
            doc("B", "beta gamma epsilon"),
            doc("C", "gamma zeta eta theta"),
        ];
        let a = LexicalRanker.score("beta gamma", &docs);
        let b = LexicalRanker.score("beta gamma", &docs);
        assert_eq!(a, b);
        assert!(a.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn empty_corpus_yields_no_scores() {
        assert!(LexicalRanker.score("anything", &[]).is_empty());
    }
}
