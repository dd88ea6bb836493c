//! Collects the degradation events of one pipeline run, in order.

use scholar_core::models::DegradationEvent;

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<DegradationEvent>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event and log it.
    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        self.events.push(event);
    }

    /// Record every event from a stage, preserving order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = DegradationEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    pub fn is_degraded(&self) -> bool {
        !self.events.is_empty()
    }

    /// Number of events recorded for `component`.
    pub fn count_for(&self, component: &str) -> usize {
        self.events.iter().filter(|e| e.component == component).count()
    }

    pub fn into_events(self) -> Vec<DegradationEvent> {
        self.events
    }
}
