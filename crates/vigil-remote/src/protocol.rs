//! Versioned wire protocol: JSON serialization with forward compatibility.
//!
//! Requests use snake_case envelopes we define. Response findings come from
//! the backend's camelCase format and are normalized into domain findings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vigil_core::models::{Finding, FindingStatus, Location, Severity};
use vigil_core::phase::Phase;

/// Current protocol version.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Envelope for all validation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// Protocol version for forward compatibility.
    pub version: String,
    /// Unique request ID for tracing.
    pub request_id: String,
    /// Timestamp of the request.
    pub timestamp: DateTime<Utc>,
    /// The actual payload.
    pub payload: ValidatePayload,
}

/// Content under validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatePayload {
    pub content: String,
    pub language: String,
    #[serde(default)]
    pub options: ValidateOptions,
}

/// Backend-facing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateOptions {
    #[serde(default)]
    pub strict: bool,
}

impl ValidateRequest {
    /// Create a new request envelope.
    pub fn new(payload: ValidatePayload) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            request_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            payload,
        }
    }
}

/// One finding as the backend reports it.
///
/// Every field except `message` is optional on the wire; absent or unknown
/// values degrade to safe defaults rather than failing the phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFinding {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub rule_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub details: Option<RawFindingDetails>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Backend-measured execution time (milliseconds).
    #[serde(default)]
    pub execution_time: Option<u64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Positional detail attached to a wire finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFindingDetails {
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl RawFinding {
    /// Map a wire finding into the domain model.
    pub fn normalize(self, phase: Phase) -> Finding {
        let severity = self
            .severity
            .as_deref()
            .map(parse_severity)
            .unwrap_or(Severity::Medium);
        let status = self
            .status
            .as_deref()
            .map(parse_status)
            .unwrap_or(FindingStatus::Error);

        let id = if self.id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            self.id
        };

        let location = self.details.and_then(|d| {
            d.line.map(|line| Location {
                line,
                column: d.column,
            })
        });

        Finding {
            id,
            source_phase: phase,
            category: phase.into(),
            severity,
            message: self.message,
            location,
            status,
            suggested_fix: self.suggestions.into_iter().next(),
            execution_time_ms: self.execution_time.unwrap_or(0),
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

fn parse_severity(s: &str) -> Severity {
    match s {
        "critical" => Severity::Critical,
        "high" => Severity::High,
        "medium" => Severity::Medium,
        "low" => Severity::Low,
        // Unknown severities are kept visible rather than dropped.
        _ => Severity::Medium,
    }
}

fn parse_status(s: &str) -> FindingStatus {
    match s {
        "passed" => FindingStatus::Passed,
        "failed" => FindingStatus::Failed,
        _ => FindingStatus::Error,
    }
}
