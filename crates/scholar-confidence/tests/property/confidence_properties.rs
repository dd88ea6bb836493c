use proptest::prelude::*;
use scholar_confidence::factors::{source, temporal};
use scholar_core::config::{ConfidenceConfig, ConfidenceWeights};
use scholar_core::models::ConfidenceReport;

proptest! {
    #[test]
    fn combined_confidence_is_clamped_weighted_sum(
        s in -1.0f64..2.0,
        c in -1.0f64..2.0,
        t in -1.0f64..2.0,
        ws in 0.0f64..1.0,
        wc in 0.0f64..1.0,
        wt in 0.0f64..1.0,
    ) {
        let weights = ConfidenceWeights { source: ws, coherence: wc, temporal: wt };
        let report = ConfidenceReport::combine(s, c, t, &weights);
        let (s, c, t) = (s.clamp(0.0, 1.0), c.clamp(0.0, 1.0), t.clamp(0.0, 1.0));
        let expected = (ws * s + wc * c + wt * t).clamp(0.0, 1.0);

        prop_assert_eq!(report.source_score, s);
        prop_assert_eq!(report.coherence_score, c);
        prop_assert_eq!(report.temporal_score, t);
        prop_assert!((report.confidence - expected).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&report.confidence));
        prop_assert!((report.quality_score - report.confidence * 10.0).abs() < 1e-9);
    }

    #[test]
    fn citation_component_is_monotonic(a in 0u64..1_000_000, b in 0u64..1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(source::citation_component(lo, 1000) <= source::citation_component(hi, 1000));
    }

    #[test]
    fn older_papers_never_score_higher(year in 1900i32..2100, delta in 0i32..50) {
        let config = ConfidenceConfig::default();
        let newer = temporal::recency(Some(year), 2024, &config);
        let older = temporal::recency(Some(year - delta), 2024, &config);
        prop_assert!(older <= newer);
        prop_assert!((0.0..=1.0).contains(&older));
    }
}
