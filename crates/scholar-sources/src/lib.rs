//! # scholar-sources
//!
//! Fetches candidate documents for a query.
//!
//! The [`SourceGateway`] asks the primary academic index first and, when it
//! is degraded, rate-limited or empty, falls back once to the secondary
//! knowledge source. Every returned [`Document`](scholar_core::Document) is
//! tagged with its origin.

pub mod gateway;
pub mod http;
pub mod semantic_scholar;
pub mod wikipedia;

pub use gateway::{FetchOutcome, SourceClient, SourceGateway};
pub use semantic_scholar::SemanticScholarClient;
pub use wikipedia::WikipediaClient;
