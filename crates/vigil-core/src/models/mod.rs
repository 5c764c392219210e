//! Domain models shared across the workspace.

mod finding;
mod progress;
mod run;
mod summary;

pub use finding::{Finding, FindingCategory, FindingStatus, Location, Severity};
pub use progress::ProgressUpdate;
pub use run::{OrchestrationRun, RunStatus};
pub use summary::{RunSummary, SeverityCounts};
