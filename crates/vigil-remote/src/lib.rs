//! # vigil-remote
//!
//! Wire protocol and HTTP transport for the remote validation backend.
//! One endpoint per phase; versioned JSON request envelopes; permissive
//! response decoding that degrades unknown enum strings instead of
//! failing the phase.

pub mod client;
pub mod executor;
pub mod protocol;

pub use client::{HttpClient, HttpClientConfig};
pub use executor::HttpPhaseExecutor;
pub use protocol::{RawFinding, ValidateOptions, ValidatePayload, ValidateRequest};
