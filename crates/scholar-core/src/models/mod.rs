mod confidence_report;
mod degradation_event;
mod document;
mod pipeline_result;
mod pipeline_state;
mod query;
mod ranked_set;
mod summary;

pub use confidence_report::ConfidenceReport;
pub use degradation_event::DegradationEvent;
pub use document::{Document, Origin, RawDocument};
pub use pipeline_result::{PipelineResult, RankingMode};
pub use pipeline_state::PipelineState;
pub use query::ResearchQuery;
pub use ranked_set::{rank_order, RankedSet};
pub use summary::{ExtractedSentence, Summary, SummarizationMode};
