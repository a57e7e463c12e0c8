//! Remote mood-analysis service client
//!
//! First tier of the mood-resolution chain: a hosted model behind
//! `POST /analyze` and `GET /health`. Any failure here is absorbed by the
//! resolver, which falls through to the local tiers.

use super::InferencePayload;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const ANALYZE_TIMEOUT: Duration = Duration::from_secs(30);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Remote ML client errors
#[derive(Debug, Error)]
pub enum RemoteMlError {
    /// Network communication error (timeout, refused connection, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Service responded with a non-2xx status
    #[error("ML service error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse the response JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the hosted mood-analysis service
pub struct RemoteMlClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RemoteMlClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteMlError> {
        let http_client = reqwest::Client::builder()
            .timeout(ANALYZE_TIMEOUT)
            .build()
            .map_err(|e| RemoteMlError::Network(e.to_string()))?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Analyze check-in text: `POST {base}/analyze` with `{"text": ...}`
    pub async fn analyze(&self, text: &str) -> Result<InferencePayload, RemoteMlError> {
        let url = format!("{}/analyze", self.base_url);
        tracing::debug!(url = %url, "Calling remote mood-analysis service");

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "text": text.trim() }))
            .send()
            .await
            .map_err(|e| RemoteMlError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteMlError::Api(status.as_u16(), body));
        }

        let payload: InferencePayload = response
            .json()
            .await
            .map_err(|e| RemoteMlError::Parse(e.to_string()))?;

        tracing::debug!(
            mood_bucket = ?payload.mood_bucket,
            safety_flag = ?payload.safety_flag,
            "Remote analysis succeeded"
        );
        Ok(payload)
    }

    /// Probe `GET {base}/health`; true only on 200 + `{"status": "healthy"}`
    pub async fn is_healthy(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let body: Option<serde_json::Value> = resp.json().await.ok();
                body.as_ref()
                    .and_then(|v| v.get("status"))
                    .and_then(|s| s.as_str())
                    == Some("healthy")
            }
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "ML health check returned error status");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "ML health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped() {
        let client = RemoteMlClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
