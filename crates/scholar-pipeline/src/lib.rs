//! # scholar-pipeline
//!
//! Runs one research query end to end:
//!
//! ```text
//! Received → Fetching → Ranking → Summarizing → Scoring → Completed
//!                                                       ↘ Failed
//! ```
//!
//! The whole run shares one wall-clock budget. Component failures degrade the
//! result instead of failing it; only missing data, invalid input and an
//! exhausted budget surface as errors.

pub mod cache;
pub mod contract;
pub mod orchestrator;
pub mod runtime;

pub use cache::ResultCache;
pub use contract::{ErrorResponse, ResearchRequest, ResearchResponse, SourceEntry};
pub use orchestrator::Orchestrator;
pub use runtime::SharedModels;
