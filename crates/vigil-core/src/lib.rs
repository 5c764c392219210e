//! # vigil-core
//!
//! Foundation crate for the Vigil validation orchestrator.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod phase;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OrchestratorConfig;
pub use errors::{ConfigurationError, RemoteError, VigilError, VigilResult};
pub use models::{Finding, FindingCategory, FindingStatus, OrchestrationRun, RunStatus, Severity};
pub use phase::Phase;
pub use traits::{PhaseExecutor, PhaseOptions};
