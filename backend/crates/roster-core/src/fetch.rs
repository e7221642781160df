//! Fetch pipeline phases for the two-step dependent read.
//!
//! Both views issue two dependent requests: accounts first, then credentials
//! filtered by the identifiers the first request produced. The sequence is
//! modeled as an explicit state machine so callers can report which step a
//! failed fetch aborted in, instead of relying on implicit await ordering.

use serde::Serialize;

/// Phase of a view's fetch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    FetchingAccounts,
    FetchingCredentials,
    Ready,
    Failed,
}

impl FetchPhase {
    /// Advance to the next phase of the happy path. Terminal phases stay put.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::FetchingAccounts,
            Self::FetchingAccounts => Self::FetchingCredentials,
            Self::FetchingCredentials => Self::Ready,
            Self::Ready => Self::Ready,
            Self::Failed => Self::Failed,
        }
    }

    /// Abort the pipeline. Any in-flight phase moves to `Failed`; a pipeline
    /// that already completed stays `Ready`.
    pub fn fail(self) -> Self {
        match self {
            Self::Ready => Self::Ready,
            _ => Self::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FetchingAccounts => "fetching-accounts",
            Self::FetchingCredentials => "fetching-credentials",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
