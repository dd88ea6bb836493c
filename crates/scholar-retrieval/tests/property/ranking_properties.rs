use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use scholar_core::config::{EmbeddingConfig, RankingConfig};
use scholar_core::models::{Document, Origin, RawDocument};
use scholar_embeddings::EmbeddingEngine;
use scholar_retrieval::RankingService;

const WORDS: &[&str] = &[
    "quantum", "error", "correction", "surface", "code", "qubit", "decoder", "noise",
    "threshold", "lattice", "photon", "ion", "bread", "tern", "the", "of",
];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn arb_documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((arb_text(), 0u64..300, 0u8..20), 0..25).prop_map(|items| {
        items
            .into_iter()
            .map(|(text, citations, id)| {
                Document::from_raw(
                    RawDocument {
                        title: format!("paper {id}"),
                        text,
                        citation_count: citations,
                        url: format!("https://example.org/{id}"),
                        ..Default::default()
                    },
                    Origin::Primary,
                )
            })
            .collect()
    })
}

fn service(strategy: &str) -> RankingService {
    let engine = Arc::new(EmbeddingEngine::new(EmbeddingConfig {
        provider: "hashed".to_string(),
        l1_cache_size: 1_000,
        ..Default::default()
    }));
    RankingService::new(
        engine,
        RankingConfig {
            strategy: strategy.to_string(),
            ..Default::default()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ranked_set_respects_bounds_and_order(
        query in arb_text(),
        docs in arb_documents(),
        max_papers in 1usize..10,
        lexical in any::<bool>(),
    ) {
        let svc = service(if lexical { "lexical" } else { "embedding" });
        let input_urls: HashSet<String> = docs.iter().map(|d| d.url.clone()).collect();
        let outcome = svc.rank(&query, docs, max_papers);

        prop_assert!(outcome.ranked.len() <= max_papers);
        let mut seen = HashSet::new();
        for d in outcome.ranked.iter() {
            prop_assert!(d.relevance_score >= 0.05 && d.relevance_score <= 1.0);
            prop_assert!(input_urls.contains(&d.url));
            prop_assert!(seen.insert(d.url.clone()));
        }
        for pair in outcome.ranked.documents().windows(2) {
            prop_assert!(pair[0].relevance_score >= pair[1].relevance_score);
            if pair[0].relevance_score == pair[1].relevance_score {
                prop_assert!(pair[0].citation_count >= pair[1].citation_count);
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(query in arb_text(), docs in arb_documents()) {
        let svc = service("embedding");
        let a = svc.rank(&query, docs.clone(), 10);
        let b = svc.rank(&query, docs, 10);
        prop_assert_eq!(a.ranked, b.ranked);
        prop_assert_eq!(a.mode, b.mode);
    }
}
