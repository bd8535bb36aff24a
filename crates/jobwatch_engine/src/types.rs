use std::fmt;

use serde::{Deserialize, Deserializer};

/// Body of `GET {resource}/status/{jobId}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job_progress: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `GET {resource}/legal-basis/{ownerId}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingJobResponse {
    #[serde(default)]
    pub has_pending_jobs: bool,
    #[serde(default, deserialize_with = "opaque_id")]
    pub job_id: Option<String>,
}

impl PendingJobResponse {
    /// The job to watch, if the backend reports one.
    pub fn pending_job_id(&self) -> Option<&str> {
        if !self.has_pending_jobs {
            return None;
        }
        self.job_id.as_deref().filter(|id| !id.is_empty())
    }
}

// Job ids are opaque; the backend sometimes sends them as numbers.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(id)) => Some(id),
        Some(serde_json::Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The polling interval for `job_id` elapsed.
    PollTick { job_id: String },
    StatusFetched {
        job_id: String,
        seq: u64,
        result: Result<StatusResponse, ApiError>,
    },
    CancelFinished {
        job_id: String,
        result: Result<(), ApiError>,
    },
    PendingJobResolved {
        owner_id: String,
        result: Result<PendingJobResponse, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// Error text the backend put in a non-2xx body, if any.
    pub server_message: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            server_message: None,
        }
    }

    pub(crate) fn http(status: u16, server_message: Option<String>) -> Self {
        Self {
            kind: FailureKind::HttpStatus(status),
            message: format!("Request failed with status code {status}"),
            server_message,
        }
    }

    pub fn http_status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }

    /// Client-side description of the failure. Transport problems all read
    /// `"Network Error"` so they classify as connectivity errors.
    pub fn client_message(&self) -> String {
        match self.kind {
            FailureKind::Network | FailureKind::Timeout => "Network Error".to_string(),
            _ => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
    EngineStopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "invalid response body"),
            FailureKind::EngineStopped => write!(f, "engine stopped"),
        }
    }
}
