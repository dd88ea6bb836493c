//! # scholar-core
//!
//! Foundation crate for the Scholar research pipeline.
//! Defines the shared data model, traits, errors, config, and text utilities.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod similarity;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScholarConfig;
pub use errors::{ScholarError, ScholarResult};
pub use models::{
    ConfidenceReport, DegradationEvent, Document, Origin, PipelineResult, PipelineState,
    RankedSet, RankingMode, RawDocument, ResearchQuery, Summary, SummarizationMode,
};
