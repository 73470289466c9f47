use std::time::Duration;

use capturequeue_core::{CaptureJob, ExperimentId, QueueSnapshot, Species};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8100/capturequeue".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Body of the replace-queue call. `species` comes from the shell's static
/// lookup; the controller does not store it per queue entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceQueueRequest {
    pub xp_id: ExperimentId,
    pub queue: Vec<CaptureJob>,
    pub species: Species,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("network error: {0}")]
    Network(String),
}

/// The remote job controller: three operations, transport-agnostic from the
/// core's point of view. Duplicate or overlapping fetch-status calls are
/// ordinary traffic.
#[async_trait::async_trait]
pub trait JobController: Send + Sync {
    async fn fetch_status(&self) -> Result<QueueSnapshot, ControllerError>;
    async fn replace_queue(&self, request: &ReplaceQueueRequest) -> Result<(), ControllerError>;
    async fn abort_all(&self) -> Result<(), ControllerError>;
}

/// Controller over HTTP: GET `status`, POST `queue`, POST `abort` under the
/// configured base URL, JSON bodies throughout.
#[derive(Debug, Clone)]
pub struct HttpJobController {
    settings: ControllerSettings,
    client: reqwest::Client,
}

impl HttpJobController {
    pub fn new(settings: ControllerSettings) -> Result<Self, ControllerError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ControllerError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl JobController for HttpJobController {
    async fn fetch_status(&self) -> Result<QueueSnapshot, ControllerError> {
        let response = self
            .client
            .get(self.url("status"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        response
            .json::<QueueSnapshot>()
            .await
            .map_err(|err| ControllerError::Decode(err.to_string()))
    }

    async fn replace_queue(&self, request: &ReplaceQueueRequest) -> Result<(), ControllerError> {
        let response = self
            .client
            .post(self.url("queue"))
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(response)?;
        Ok(())
    }

    async fn abort_all(&self) -> Result<(), ControllerError> {
        let response = self
            .client
            .post(self.url("abort"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ControllerError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ControllerError::HttpStatus(status.as_u16()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ControllerError {
    if err.is_timeout() {
        return ControllerError::Timeout;
    }
    if err.is_decode() {
        return ControllerError::Decode(err.to_string());
    }
    ControllerError::Network(err.to_string())
}
