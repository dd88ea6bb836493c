//! Salience-based sentence extraction.

use std::collections::{BTreeMap, BTreeSet};

use scholar_core::config::SummarizationConfig;
use scholar_core::models::{Document, ExtractedSentence, RankedSet};
use scholar_core::text::{clean_text, content_terms, split_sentences};

pub struct ExtractiveSelector {
    config: SummarizationConfig,
}

impl ExtractiveSelector {
    pub fn new(config: SummarizationConfig) -> Self {
        Self { config }
    }

    /// Select extracts from every ranked document, best-ranked first.
    ///
    /// Per document, the top `sentences_per_document` by salience are kept
    /// in their original order. Selection stops at `max_summary_sentences`.
    /// A document whose sentences are all shorter than `min_sentence_chars`
    /// still contributes its single most salient sentence.
    pub fn select(&self, query: &str, ranked: &RankedSet) -> Vec<ExtractedSentence> {
        let query_terms: BTreeSet<String> = content_terms(query).into_iter().collect();
        let mut extracts = Vec::new();
        for doc in ranked {
            let remaining = self
                .config
                .max_summary_sentences
                .saturating_sub(extracts.len());
            if remaining == 0 {
                break;
            }
            let take = self.config.sentences_per_document.min(remaining);
            extracts.extend(self.select_from(doc, &query_terms, take));
        }
        extracts
    }

    fn select_from(
        &self,
        doc: &Document,
        query_terms: &BTreeSet<String>,
        take: usize,
    ) -> Vec<ExtractedSentence> {
        let sentences = split_sentences(&doc.abstract_text);
        let tf = normalized_term_frequency(&doc.abstract_text);

        let candidates: Vec<(bool, ExtractedSentence)> = sentences
            .iter()
            .enumerate()
            .map(|(position, s)| {
                let long_enough = s.chars().count() >= self.config.min_sentence_chars;
                let extract = ExtractedSentence {
                    text: clean_text(s),
                    document_url: doc.url.clone(),
                    position,
                    salience: self.salience(s, position, &tf, query_terms),
                };
                (long_enough, extract)
            })
            .filter(|(_, e)| !e.text.is_empty())
            .collect();

        let any_long = candidates.iter().any(|(long_enough, _)| *long_enough);
        let mut scored: Vec<ExtractedSentence> = candidates
            .into_iter()
            .filter(|(long_enough, _)| *long_enough || !any_long)
            .map(|(_, e)| e)
            .collect();

        scored.sort_by(|a, b| {
            b.salience
                .total_cmp(&a.salience)
                .then_with(|| a.position.cmp(&b.position))
        });
        scored.truncate(if any_long { take } else { take.min(1) });
        scored.sort_by_key(|e| e.position);
        scored
    }

    /// `position·1/(1+i) + tf·mean(normalized tf) + query·overlap`.
    pub fn salience(
        &self,
        sentence: &str,
        position: usize,
        tf: &BTreeMap<String, f64>,
        query_terms: &BTreeSet<String>,
    ) -> f64 {
        let terms = content_terms(sentence);
        let position_score = 1.0 / (1.0 + position as f64);

        let tf_score = if terms.is_empty() {
            0.0
        } else {
            terms
                .iter()
                .map(|t| tf.get(t).copied().unwrap_or(0.0))
                .sum::<f64>()
                / terms.len() as f64
        };

        let overlap = if query_terms.is_empty() {
            0.0
        } else {
            let present: BTreeSet<&String> = terms.iter().collect();
            query_terms.iter().filter(|q| present.contains(q)).count() as f64
                / query_terms.len() as f64
        };

        self.config.position_weight * position_score
            + self.config.term_frequency_weight * tf_score
            + self.config.query_overlap_weight * overlap
    }
}

/// Term counts divided by the most frequent term's count.
pub fn normalized_term_frequency(text: &str) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for term in content_terms(text) {
        *counts.entry(term).or_default() += 1.0;
    }
    let max = counts.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for v in counts.values_mut() {
            *v /= max;
        }
    }
    counts
}
