use serde::{Deserialize, Serialize};

use super::defaults;

/// Ensemble weights for the three confidence signals.
///
/// `confidence = source·s + coherence·c + temporal·t`, clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub source: f64,
    pub coherence: f64,
    pub temporal: f64,
}

impl ConfidenceWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.source + self.coherence + self.temporal
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            source: defaults::DEFAULT_SOURCE_WEIGHT,
            coherence: defaults::DEFAULT_COHERENCE_WEIGHT,
            temporal: defaults::DEFAULT_TEMPORAL_WEIGHT,
        }
    }
}

/// Confidence estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub weights: ConfidenceWeights,
    /// Citation count at which the citation component saturates to 1.0.
    pub citation_saturation: u64,
    /// Documents at most this many years old get full temporal score.
    pub full_score_years: u32,
    /// Half-life (years) of temporal decay past the full-score horizon.
    pub half_life_years: f64,
    /// Temporal score for documents with no known year.
    pub unknown_year_score: f64,
    /// Case-insensitive venue fragments treated as reputable.
    pub reputable_venues: Vec<String>,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
            citation_saturation: defaults::DEFAULT_CITATION_SATURATION,
            full_score_years: defaults::DEFAULT_FULL_SCORE_YEARS,
            half_life_years: defaults::DEFAULT_HALF_LIFE_YEARS,
            unknown_year_score: defaults::DEFAULT_UNKNOWN_YEAR_SCORE,
            reputable_venues: defaults::DEFAULT_REPUTABLE_VENUES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}
