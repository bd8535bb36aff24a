use std::time::Duration;

use url::Url;
use watch_logging::{watch_debug, watch_warn};

use crate::{ApiError, FailureKind, PendingJobResponse, StatusResponse};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    /// Resource path of the job kind, e.g. `articles/extraction`.
    pub resource: String,
    /// Bearer credential, passed explicitly instead of read from ambient state.
    pub token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: Url, resource: impl Into<String>) -> Self {
        Self {
            base_url,
            resource: resource.into(),
            token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Backend job endpoints. One request per call, no retries.
#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    async fn fetch_status(&self, job_id: &str) -> Result<StatusResponse, ApiError>;

    async fn cancel(&self, job_id: &str) -> Result<(), ApiError>;

    async fn pending_job(&self, owner_id: &str) -> Result<PendingJobResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestJobApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        if settings.base_url.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as an API root", settings.base_url),
            ));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
            .pop_if_empty()
            .extend(self.settings.resource.split('/').filter(|s| !s.is_empty()))
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match self.settings.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn execute(&self, method: reqwest::Method, url: Url) -> Result<Vec<u8>, ApiError> {
        watch_debug!("{} {}", method, url);
        let response = self
            .request(method, url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let server_message = server_message(&body);
            watch_warn!(
                "backend answered {} ({})",
                status,
                server_message.as_deref().unwrap_or("no message")
            );
            return Err(ApiError::http(status.as_u16(), server_message));
        }
        Ok(body.to_vec())
    }
}

#[async_trait::async_trait]
impl JobApi for ReqwestJobApi {
    async fn fetch_status(&self, job_id: &str) -> Result<StatusResponse, ApiError> {
        let url = self.endpoint(&["status", job_id])?;
        let body = self.execute(reqwest::Method::GET, url).await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }

    async fn cancel(&self, job_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&[job_id])?;
        self.execute(reqwest::Method::DELETE, url).await?;
        Ok(())
    }

    async fn pending_job(&self, owner_id: &str) -> Result<PendingJobResponse, ApiError> {
        let url = self.endpoint(&["legal-basis", owner_id])?;
        let body = self.execute(reqwest::Method::GET, url).await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

/// Extracts `error` (preferred) or `message` from a JSON error body.
fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
