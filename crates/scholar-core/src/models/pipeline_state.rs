use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of one pipeline run.
///
/// `Received → Fetching → Ranking → Summarizing → Scoring → Completed`,
/// with `Failed` reachable from every non-terminal state and
/// `Ranking → Completed` for an empty ranked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PipelineState {
    Received = 0,
    Fetching = 1,
    Ranking = 2,
    Summarizing = 3,
    Scoring = 4,
    Completed = 5,
    Failed = 6,
}

impl PipelineState {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8). Unknown codes map to `Failed`.
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Self::Received,
            1 => Self::Fetching,
            2 => Self::Ranking,
            3 => Self::Summarizing,
            4 => Self::Scoring,
            5 => Self::Completed,
            _ => Self::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Completed | Failed, _) => false,
            (_, Failed) => true,
            (Received, Fetching)
            | (Fetching, Ranking)
            | (Ranking, Summarizing)
            | (Ranking, Completed)
            | (Summarizing, Scoring)
            | (Scoring, Completed) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Fetching => "fetching",
            Self::Ranking => "ranking",
            Self::Summarizing => "summarizing",
            Self::Scoring => "scoring",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_legal() {
        use PipelineState::*;
        let path = [Received, Fetching, Ranking, Summarizing, Scoring, Completed];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn empty_ranking_may_complete_early() {
        assert!(PipelineState::Ranking.can_transition_to(PipelineState::Completed));
        assert!(!PipelineState::Fetching.can_transition_to(PipelineState::Completed));
    }

    #[test]
    fn terminal_states_are_final() {
        for s in [PipelineState::Completed, PipelineState::Failed] {
            assert!(s.is_terminal());
            assert!(!s.can_transition_to(PipelineState::Fetching));
            assert!(!s.can_transition_to(PipelineState::Failed));
        }
    }

    #[test]
    fn u8_roundtrip() {
        for code in 0..=6u8 {
            assert_eq!(PipelineState::from_u8(code).as_u8(), code);
        }
        assert_eq!(PipelineState::from_u8(200), PipelineState::Failed);
    }
}
