//! # scholar-observability
//!
//! Tracing setup, one span per pipeline stage, named structured events, and
//! the per-run degradation tracker.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::DegradationTracker;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
