/// Video Host Client Library
///
/// Centralizes the HTTP client for the video-hosting service so every
/// consumer talks to it the same way. The hosting service owns per-video
/// detail (title, stream URL, view counts); callers here only hand it an
/// identifier and pass the response through.
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Full video metadata as returned by the hosting service.
///
/// This crate does not interpret the payload; fields mirror the host's
/// GetVideoInfo response and are forwarded unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date_uploaded: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub stream_url: String,
}

/// Errors from the video-hosting service call path.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("video host request failed: {0}")]
    Request(String),

    #[error("video host deadline exceeded: {0}")]
    Timeout(String),

    #[error("video host call canceled: {0}")]
    Canceled(String),

    #[error("video not found on host: {0}")]
    NotFound(String),

    #[error("video host returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode video host response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HostError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HostError::Timeout(err.to_string())
        } else if err.is_decode() {
            HostError::Decode(err.to_string())
        } else {
            HostError::Request(err.to_string())
        }
    }
}

/// HTTP client for the video-hosting service.
///
/// One instance per process; `reqwest::Client` pools connections internally
/// so cloning is cheap and shared across workers.
#[derive(Clone)]
pub struct VideoHostClient {
    http: reqwest::Client,
    base_url: String,
}

impl VideoHostClient {
    /// Create a client against `base_url` with a per-request deadline.
    ///
    /// The deadline covers connect, request and body read; when it fires the
    /// caller sees `HostError::Timeout`, distinguishable from transport
    /// failures.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HostError::Request(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    /// Fetch full detail for a single video identifier.
    ///
    /// Never retried and never cached here; the hosting service is
    /// authoritative and failures propagate as-is.
    pub async fn get_video_info(&self, id: &str) -> Result<VideoDetail, HostError> {
        let url = format!("{}/api/v1/videos/{}", self.base_url, id);
        debug!(video_id = %id, "Fetching video detail from host");

        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<VideoDetail>().await?),
            StatusCode::NOT_FOUND => Err(HostError::NotFound(id.to_string())),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(HostError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
