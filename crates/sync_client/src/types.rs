use std::fmt;

use serde::Deserialize;

/// One server-reported progress reading. `progress` is meaningful only
/// when the status is not idle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobStatus {
    pub status: String,
    pub progress: u8,
}

impl JobStatus {
    pub fn is_idle(&self) -> bool {
        self.status == "idle"
    }
}

/// Result counters from a completed sync. Every field is optional on the
/// wire; the server includes only what applies to the finished job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SyncReport {
    pub created: Option<u64>,
    pub updated: Option<u64>,
    pub errors: Option<u64>,
    pub orphans_zeroed: Option<u64>,
    pub message: Option<String>,
}

/// Response payload of a quick-edit request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct QuickEditOutcome {
    pub message: Option<String>,
}

/// Events emitted by the client runtime, pulled by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SyncCompleted {
        result: Result<SyncReport, SyncFailure>,
    },
    ItemSyncCompleted {
        product_id: u64,
        result: Result<SyncReport, SyncFailure>,
    },
    QuickEditCompleted {
        product_id: u64,
        result: Result<QuickEditOutcome, SyncFailure>,
    },
    Progress(JobStatus),
}

/// Failure of a request against the remote endpoint. The message is
/// opaque display text; callers never parse it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SyncFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SyncFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with `success: false`.
    Rejected,
    /// The request never produced a usable response.
    Transport,
    Timeout,
    /// The response body did not match the expected envelope.
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected => write!(f, "rejected"),
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
