//! Orchestrator: the per-request state machine.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use scholar_confidence::ConfidenceEstimator;
use scholar_core::config::{PipelineConfig, ScholarConfig};
use scholar_core::errors::{ScholarError, ScholarResult, SourceError};
use scholar_core::models::{
    ConfidenceReport, PipelineResult, PipelineState, RankedSet, ResearchQuery, SummarizationMode,
    Summary,
};
use scholar_observability::tracing_setup::events;
use scholar_observability::{
    fetch_span, pipeline_span, ranking_span, scoring_span, summarization_span, DegradationTracker,
};
use scholar_retrieval::RankingService;
use scholar_sources::{FetchOutcome, SourceGateway};
use scholar_summarization::SummarizationEngine;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::cache::ResultCache;
use crate::runtime::SharedModels;

/// Last state a run reached, readable after its future is dropped.
#[derive(Debug, Clone)]
struct StageCell(Arc<AtomicU8>);

impl StageCell {
    fn new() -> Self {
        Self(Arc::new(AtomicU8::new(PipelineState::Received.as_u8())))
    }

    fn get(&self) -> PipelineState {
        PipelineState::from_u8(self.0.load(Ordering::SeqCst))
    }

    fn advance(&self, next: PipelineState) {
        let prev = PipelineState::from_u8(self.0.swap(next.as_u8(), Ordering::SeqCst));
        debug_assert!(prev.can_transition_to(next), "{prev} -> {next}");
        events::stage_transition(prev, next);
    }
}

pub struct Orchestrator {
    gateway: SourceGateway,
    ranking: Arc<RankingService>,
    summarization: Arc<SummarizationEngine>,
    confidence: Arc<ConfidenceEstimator>,
    cache: Option<ResultCache>,
    config: PipelineConfig,
    reference_year: Option<i32>,
}

impl Orchestrator {
    /// Wire the pipeline around `gateway` and the shared models.
    pub fn new(gateway: SourceGateway, models: Arc<SharedModels>, config: &ScholarConfig) -> Self {
        let ranking = RankingService::new(Arc::clone(&models.embeddings), config.ranking.clone());
        let summarization = SummarizationEngine::new(
            config.summarization.clone(),
            Some(Arc::clone(&models.summarizer)),
        );
        let confidence =
            ConfidenceEstimator::new(Arc::clone(&models.embeddings), config.confidence.clone());
        let cache = config
            .pipeline
            .cache_enabled
            .then(|| ResultCache::from_config(&config.pipeline));

        Self {
            gateway,
            ranking: Arc::new(ranking),
            summarization: Arc::new(summarization),
            confidence: Arc::new(confidence),
            cache,
            config: config.pipeline.clone(),
            reference_year: None,
        }
    }

    /// Production wiring: live HTTP sources and the global shared models.
    pub fn from_config(config: &ScholarConfig) -> ScholarResult<Self> {
        config.validate()?;
        let gateway = SourceGateway::from_config(&config.sources)?;
        Ok(Self::new(
            gateway,
            SharedModels::global(&config.embedding),
            config,
        ))
    }

    /// Pin the year recency is measured against (defaults to the current year).
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn cache(&self) -> Option<&ResultCache> {
        self.cache.as_ref()
    }

    pub fn gateway(&self) -> &SourceGateway {
        &self.gateway
    }

    pub fn ranking(&self) -> &RankingService {
        &self.ranking
    }

    /// Run one query to a terminal state.
    ///
    /// # Errors
    /// - `InvalidQuery`: rejected before any source is called.
    /// - `NoDataAvailable`: every source failed.
    /// - `Timeout`: the time budget ran out; names the last stage reached.
    pub async fn run(&self, query: &ResearchQuery) -> ScholarResult<PipelineResult> {
        let request_id = Uuid::new_v4();
        let span = pipeline_span!(request_id, query.max_papers());
        self.run_inner(query).instrument(span).await
    }

    async fn run_inner(&self, query: &ResearchQuery) -> ScholarResult<PipelineResult> {
        let started = Instant::now();

        if let Err(e) = query.validate(&self.config) {
            events::pipeline_failed(e.kind().as_str(), PipelineState::Received, &e.to_string());
            return Err(e);
        }

        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(query)) {
            events::cache_hit(&query.normalized_text(), query.max_papers());
            let mut result = PipelineResult::clone(&hit);
            result.below_threshold = query.is_below_threshold(result.confidence.confidence);
            result.processing_time = started.elapsed();
            return Ok(result);
        }

        let stage = StageCell::new();
        let budget = Duration::from_millis(self.config.time_budget_ms);
        let outcome = tokio::time::timeout(budget, self.execute(query, &stage, started)).await;

        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                let e = match e {
                    ScholarError::Source(SourceError::Unavailable { primary, secondary }) => {
                        ScholarError::NoDataAvailable {
                            detail: format!("primary: {primary}; secondary: {secondary}"),
                        }
                    }
                    other => other,
                };
                events::pipeline_failed(e.kind().as_str(), stage.get(), &e.to_string());
                return Err(e);
            }
            Err(_) => {
                let e = ScholarError::Timeout {
                    budget_ms: self.config.time_budget_ms,
                    stage: stage.get(),
                };
                events::pipeline_failed(e.kind().as_str(), stage.get(), &e.to_string());
                return Err(e);
            }
        };

        events::pipeline_completed(
            result.papers_analyzed(),
            result.confidence.confidence,
            result.is_degraded(),
            result.processing_time,
        );
        if let Some(cache) = &self.cache {
            cache.insert(query, Arc::new(result.clone()));
        }
        Ok(result)
    }

    async fn execute(
        &self,
        query: &ResearchQuery,
        stage: &StageCell,
        started: Instant,
    ) -> ScholarResult<PipelineResult> {
        let text = query.text().trim().to_string();
        let max_papers = query.max_papers();
        let mut tracker = DegradationTracker::new();

        stage.advance(PipelineState::Fetching);
        let FetchOutcome {
            documents,
            origin,
            degradation,
        } = self
            .gateway
            .fetch(&text, max_papers)
            .instrument(fetch_span!(self.gateway.primary_name()))
            .await?;
        tracker.extend(degradation);

        stage.advance(PipelineState::Ranking);
        let ranking = Arc::clone(&self.ranking);
        let q = text.clone();
        let ranked = tokio::task::spawn_blocking(move || {
            let _span = ranking_span!(documents.len()).entered();
            ranking.rank(&q, documents, max_papers)
        })
        .await
        .map_err(|e| join_failure(PipelineState::Ranking, e))?;
        tracker.extend(ranked.degradation);
        let ranking_mode = ranked.mode;

        if ranked.ranked.is_empty() {
            stage.advance(PipelineState::Completed);
            return Ok(PipelineResult {
                query: text,
                summary: Summary::empty(),
                ranked: RankedSet::empty(),
                confidence: ConfidenceReport::zero(),
                api_status: origin,
                ranking_mode,
                summarization_mode: SummarizationMode::Empty,
                below_threshold: query.is_below_threshold(0.0),
                degradation_events: tracker.into_events(),
                processing_time: started.elapsed(),
            });
        }

        stage.advance(PipelineState::Summarizing);
        let summarization = Arc::clone(&self.summarization);
        let q = text.clone();
        let ranked_set = ranked.ranked;
        let (ranked_set, summarized) = tokio::task::spawn_blocking(move || {
            let _span = summarization_span!(ranked_set.len()).entered();
            let out = summarization.summarize(&q, &ranked_set);
            (ranked_set, out)
        })
        .await
        .map_err(|e| join_failure(PipelineState::Summarizing, e))?;
        tracker.extend(summarized.degradation);

        stage.advance(PipelineState::Scoring);
        let confidence = Arc::clone(&self.confidence);
        let summary = summarized.summary;
        let reference_year = self
            .reference_year
            .unwrap_or_else(|| chrono::Utc::now().year());
        let (ranked_set, summary, scored) = tokio::task::spawn_blocking(move || {
            let _span = scoring_span!(ranked_set.len()).entered();
            let out = confidence.score_reporting(&ranked_set, &summary, reference_year);
            (ranked_set, summary, out)
        })
        .await
        .map_err(|e| join_failure(PipelineState::Scoring, e))?;
        tracker.extend(scored.degradation);

        stage.advance(PipelineState::Completed);
        Ok(PipelineResult {
            query: text,
            summarization_mode: summary.mode,
            summary,
            ranked: ranked_set,
            below_threshold: query.is_below_threshold(scored.report.confidence),
            confidence: scored.report,
            api_status: origin,
            ranking_mode,
            degradation_events: tracker.into_events(),
            processing_time: started.elapsed(),
        })
    }
}

fn join_failure(stage: PipelineState, e: tokio::task::JoinError) -> ScholarError {
    ScholarError::Internal(format!("{stage} task failed: {e}"))
}
