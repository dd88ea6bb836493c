use serde::{Deserialize, Serialize};

use crate::config::ConfidenceWeights;
use crate::constants::QUALITY_SCALE;

/// Ensembled trust signals for one pipeline result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub source_score: f64,
    pub coherence_score: f64,
    pub temporal_score: f64,
    /// Weighted sum of the three signals, in [0.0, 1.0].
    pub confidence: f64,
    /// `confidence × 10`, in [0.0, 10.0].
    pub quality_score: f64,
}

impl ConfidenceReport {
    /// Combine the three signals. Inputs are clamped before weighting and the
    /// result is clamped after.
    pub fn combine(source: f64, coherence: f64, temporal: f64, weights: &ConfidenceWeights) -> Self {
        let source = unit(source);
        let coherence = unit(coherence);
        let temporal = unit(temporal);
        let confidence = unit(
            weights.source * source + weights.coherence * coherence + weights.temporal * temporal,
        );
        Self {
            source_score: source,
            coherence_score: coherence,
            temporal_score: temporal,
            confidence,
            quality_score: confidence * QUALITY_SCALE,
        }
    }

    /// The report attached to a run that found nothing relevant.
    pub fn zero() -> Self {
        Self {
            source_score: 0.0,
            coherence_score: 0.0,
            temporal_score: 0.0,
            confidence: 0.0,
            quality_score: 0.0,
        }
    }
}

fn unit(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
