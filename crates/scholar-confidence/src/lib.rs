//! # scholar-confidence
//!
//! Scores how much a summary can be trusted from three signals:
//!
//! ```text
//! confidence = w_s·source + w_c·coherence + w_t·temporal     ∈ [0, 1]
//! quality    = confidence × 10
//! ```
//!
//! Every factor is a pure function of its inputs; the reference year is
//! passed in rather than read from the clock.

pub mod estimator;
pub mod factors;

pub use estimator::{ConfidenceEstimator, ConfidenceOutcome};
