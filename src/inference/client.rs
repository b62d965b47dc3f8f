use super::types::InferencePayload;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_ERROR_DETAILS: usize = 1000;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Whether a bearer token is available for outbound calls.
    fn is_configured(&self) -> bool;

    /// Runs text-to-image inference and returns the raw image bytes.
    async fn text_to_image(&self, payload: &InferencePayload) -> Result<Vec<u8>>;
}

pub struct HuggingFaceClient {
    client: reqwest::Client,
    model_url: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            model_url: config.model_url.clone(),
            token: config.token().map(str::to_string),
        })
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    async fn text_to_image(&self, payload: &InferencePayload) -> Result<Vec<u8>> {
        let token = self.token.as_deref().ok_or(Error::MissingCredential)?;

        debug!(
            "Requesting {}x{} image from {}",
            payload.parameters.width, payload.parameters.height, self.model_url
        );

        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = error_details(status, response.text().await);
            warn!("Inference service responded with {}: {}", status, details);
            return Err(Error::upstream(status.as_u16(), details));
        }

        let bytes = response.bytes().await?;
        debug!("Received {} image bytes", bytes.len());

        Ok(bytes.to_vec())
    }
}

/// Upstream error body text, or the status reason when the body is empty or unreadable.
fn error_details(
    status: reqwest::StatusCode,
    body: std::result::Result<String, reqwest::Error>,
) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown status");

    match body {
        Ok(body) if !body.trim().is_empty() => {
            body.trim().chars().take(MAX_ERROR_DETAILS).collect()
        }
        Ok(_) => reason.to_string(),
        Err(e) => format!("{} (failed to read error body: {})", reason, e),
    }
}
