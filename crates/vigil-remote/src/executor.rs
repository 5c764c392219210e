//! HTTP-backed implementation of the `PhaseExecutor` seam.

use vigil_core::errors::RemoteError;
use vigil_core::models::Finding;
use vigil_core::phase::Phase;
use vigil_core::traits::{PhaseExecutor, PhaseOptions};

use crate::client::{HttpClient, HttpClientConfig};
use crate::protocol::{ValidateOptions, ValidatePayload, ValidateRequest};

/// Runs each phase against the remote backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPhaseExecutor {
    client: HttpClient,
}

impl HttpPhaseExecutor {
    pub fn new(config: HttpClientConfig) -> Self {
        Self {
            client: HttpClient::new(config),
        }
    }

    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

impl PhaseExecutor for HttpPhaseExecutor {
    async fn execute(
        &self,
        phase: Phase,
        content: &str,
        language: &str,
        options: &PhaseOptions,
    ) -> Result<Vec<Finding>, RemoteError> {
        let request = ValidateRequest::new(ValidatePayload {
            content: content.to_string(),
            language: language.to_string(),
            options: ValidateOptions {
                strict: options.strict,
            },
        });

        tracing::debug!("remote: {} request {}", phase, request.request_id);
        let raw = self
            .client
            .post_phase(phase, &request, options.timeout)
            .await?;
        tracing::debug!("remote: {} returned {} findings", phase, raw.len());

        Ok(raw.into_iter().map(|r| r.normalize(phase)).collect())
    }
}
