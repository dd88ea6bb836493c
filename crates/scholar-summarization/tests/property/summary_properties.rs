use std::sync::Arc;

use proptest::prelude::*;
use scholar_core::config::SummarizationConfig;
use scholar_core::models::{Document, Origin, RankedSet, RawDocument};
use scholar_summarization::{SentenceFusion, SummarizationEngine};

const WORDS: &[&str] = &[
    "quantum", "lattice", "decoder", "photon", "threshold", "qubit", "noise", "surface", "entangled",
    "parity", "syndrome", "fidelity",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 3..9).prop_map(|words| {
        let mut s = words.join(" ");
        if let Some(first) = s.get(..1) {
            s = format!("{}{}", first.to_uppercase(), &s[1..]);
        }
        s.push('.');
        s
    })
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (prop::collection::vec(sentence(), 1..5), 0.0f64..1.0),
        0..8,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (sentences, score))| {
                let raw = RawDocument {
                    title: format!("Paper {i}"),
                    url: format!("https://example.org/p/{i}"),
                    text: sentences.join(" "),
                    ..Default::default()
                };
                Document::from_raw(raw, Origin::Primary).with_relevance(score)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn citations_come_from_ranked_set(docs in documents(), max_papers in 1usize..6) {
        let ranked = RankedSet::from_scored(docs, max_papers);
        let engine = SummarizationEngine::new(
            SummarizationConfig::default(),
            Some(Arc::new(SentenceFusion)),
        );
        let out = engine.summarize("quantum decoder threshold", &ranked);

        for url in out.summary.cited_urls() {
            prop_assert!(ranked.contains_url(url));
        }
        for extract in &out.summary.extracts {
            prop_assert!(out.summary.cited_urls().any(|u| u == extract.document_url));
        }
        prop_assert!(out.summary.extracts.len() <= SummarizationConfig::default().max_summary_sentences);
        prop_assert_eq!(out.summary.is_empty(), out.summary.extracts.is_empty());
        prop_assert_eq!(out.summary.is_empty(), ranked.is_empty());
    }
}
