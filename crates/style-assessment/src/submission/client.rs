use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::{Identity, ResponseSet};

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub company: String,
    pub responses: ResponseSet,
}

impl SubmitRequest {
    pub fn new(identity: &Identity, responses: &ResponseSet) -> Self {
        Self {
            name: identity.name.clone(),
            company: identity.company.clone(),
            responses: responses.clone(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.name.clone(), self.company.clone())
    }
}

/// Acknowledgement returned by the submit endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),
    #[error("submission endpoint unreachable: {0}")]
    Transport(reqwest::Error),
    #[error("submission rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Remote persistence path as seen by the assessment client.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitAck, GatewayError>;
}

/// Posts submissions to a running backend over HTTP. One attempt per call.
#[derive(Debug, Clone)]
pub struct HttpSubmissionGateway {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSubmissionGateway {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Transport)?;
        let endpoint = format!("{}/api/submit", api_url.trim_end_matches('/'));

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Transport(err)
        }
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, request: &SubmitRequest) -> Result<SubmitAck, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| self.map_error(err))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| self.map_error(err))?;
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(ack) => Ok(ack),
            Err(err) => {
                debug!(
                    status = status.as_u16(),
                    error = %err,
                    endpoint = %self.endpoint,
                    "submission acknowledged with unparseable body; treating as success"
                );
                Ok(SubmitAck {
                    success: true,
                    message: None,
                })
            }
        }
    }
}
