//! Error taxonomy for the Vigil workspace.
//!
//! `ConfigurationError` is fatal and raised synchronously before any phase
//! executes. `RemoteError` is recovered locally by the orchestrator as a
//! synthetic finding and never escapes `run()`.

mod config_error;
mod remote_error;

pub use config_error::ConfigurationError;
pub use remote_error::RemoteError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Workspace-wide result alias.
pub type VigilResult<T> = Result<T, VigilError>;
