use crate::phase::Phase;

/// A phase backend call failed.
///
/// Each variant names the phase it belongs to; a failure is scoped to that
/// phase only and never aborts the surrounding run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("{phase} backend returned status {status}: {message}")]
    Backend {
        phase: Phase,
        status: u16,
        message: String,
    },

    #[error("{phase} network error: {reason}")]
    Network { phase: Phase, reason: String },

    #[error("{phase} timed out after {elapsed_ms}ms")]
    Timeout { phase: Phase, elapsed_ms: u64 },

    #[error("{phase} response decode failed: {reason}")]
    Decode { phase: Phase, reason: String },
}

impl RemoteError {
    /// The phase this failure belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            RemoteError::Backend { phase, .. }
            | RemoteError::Network { phase, .. }
            | RemoteError::Timeout { phase, .. }
            | RemoteError::Decode { phase, .. } => *phase,
        }
    }

    /// Whether this failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteError::Timeout { .. })
    }
}
