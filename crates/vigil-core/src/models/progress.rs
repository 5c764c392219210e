use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Snapshot emitted to the run observer before each phase executes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Sequence number of the run this update belongs to.
    pub seq: u64,
    pub phase: Phase,
    pub phase_index: usize,
    pub phase_count: usize,
    pub progress_percent: f64,
}
