//! HTTP client wrapper: one endpoint per phase, status mapping, timeouts.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use vigil_core::config::defaults;
use vigil_core::errors::RemoteError;
use vigil_core::phase::Phase;

use crate::protocol::{RawFinding, ValidateRequest};

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Base URL of the validation backend.
    pub base_url: String,
    /// Per-request timeout (milliseconds) when the caller passes none.
    pub timeout_ms: u64,
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: defaults::DEFAULT_PHASE_TIMEOUT_MS,
        }
    }
}

/// Thin wrapper over `reqwest::Client` speaking the validation protocol.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Endpoint for one phase: `{base}/validate/{phase}`.
    pub(crate) fn endpoint(&self, phase: Phase) -> String {
        format!(
            "{}/validate/{}",
            self.config.base_url.trim_end_matches('/'),
            phase.as_str()
        )
    }

    /// POST one phase validation request and decode the finding list.
    ///
    /// Status >= 500 and protocol failures map to `RemoteError::Backend`;
    /// transport timeouts to `RemoteError::Timeout`; everything else in
    /// the transport to `RemoteError::Network`.
    pub async fn post_phase(
        &self,
        phase: Phase,
        request: &ValidateRequest,
        timeout: Duration,
    ) -> Result<Vec<RawFinding>, RemoteError> {
        let started = Instant::now();

        let response = self
            .http
            .post(self.endpoint(phase))
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| map_transport_error(phase, e, started))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Backend {
                phase,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<RawFinding>>()
            .await
            .map_err(|e| RemoteError::Decode {
                phase,
                reason: e.to_string(),
            })
    }
}

fn map_transport_error(phase: Phase, err: reqwest::Error, started: Instant) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout {
            phase,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    } else {
        RemoteError::Network {
            phase,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_phase_name() {
        let client = HttpClient::new(HttpClientConfig {
            base_url: "https://governance.example.com/api".to_string(),
            ..Default::default()
        });
        assert_eq!(
            client.endpoint(Phase::Compliance),
            "https://governance.example.com/api/validate/compliance"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = HttpClient::new(HttpClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        });
        assert_eq!(
            client.endpoint(Phase::Syntax),
            "http://localhost:8080/validate/syntax"
        );
    }
}
