use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::error::ApiError;

/// Where a simulation request is answered: computed in-process, or
/// relayed to a configured backend deployment. Chosen once at
/// construction from the service configuration.
pub enum ComputeStrategy {
    Local,
    Remote(RemoteBackend),
}

/// Relays simulation requests to `<base_url>/api/simulation/run`,
/// forwarding the caller's body byte-for-byte and returning the remote
/// JSON payload untouched.
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A non-success remote status is a failure here, never a silent
    /// pass-through; the remote body is carried in the error message.
    pub async fn run_simulation(&self, body: Bytes) -> Result<Bytes, ApiError> {
        let url = format!("{}/api/simulation/run", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| ApiError::Upstream(format!("backend request failed: {err}")))?;

        let status = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(|err| ApiError::Upstream(format!("backend response unreadable: {err}")))?;

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "backend returned {}: {}",
                status,
                String::from_utf8_lossy(&payload)
            )));
        }
        Ok(payload)
    }
}
