use scholar_core::config::ConfidenceConfig;
use scholar_core::models::Document;

const CITATION_WEIGHT: f64 = 0.7;
const VENUE_WEIGHT: f64 = 0.3;

const REPUTABLE_VENUE: f64 = 1.0;
const OTHER_VENUE: f64 = 0.6;
const NO_VENUE: f64 = 0.3;

/// Per-document reliability: `0.7·citations + 0.3·venue`.
///
/// Range: 0.0 – 1.0. Monotonic in citation count for a fixed venue.
pub fn reliability(doc: &Document, config: &ConfidenceConfig) -> f64 {
    let r = CITATION_WEIGHT * citation_component(doc.citation_count, config.citation_saturation)
        + VENUE_WEIGHT * venue_component(&doc.venue, &config.reputable_venues);
    r.clamp(0.0, 1.0)
}

/// `ln(1+c) / ln(1+saturation)`, clamped to [0, 1].
pub fn citation_component(citations: u64, saturation: u64) -> f64 {
    if saturation == 0 {
        return 1.0;
    }
    let c = (citations as f64).ln_1p() / (saturation as f64).ln_1p();
    c.clamp(0.0, 1.0)
}

/// 1.0 for a reputable venue, 0.6 for any other named venue, 0.3 for none.
pub fn venue_component(venue: &str, reputable: &[String]) -> f64 {
    let venue = venue.trim().to_lowercase();
    if venue.is_empty() {
        return NO_VENUE;
    }
    let known = reputable
        .iter()
        .any(|r| !r.is_empty() && venue.contains(&r.to_lowercase()));
    if known {
        REPUTABLE_VENUE
    } else {
        OTHER_VENUE
    }
}

/// Mean reliability over `docs`.
pub fn calculate(docs: &[&Document], config: &ConfidenceConfig) -> f64 {
    super::mean(docs.iter().map(|d| reliability(d, config)))
}
