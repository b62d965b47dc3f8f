use super::GenerationRequest;
use crate::{Error, Result, inference::InferenceClient, lineart::ImageTranscoder};
use std::sync::Arc;
use tracing::{debug, info};

/// The generate pipeline: credential check, inference call, line-art transcoding.
#[derive(Clone)]
pub struct LineArtGenerator {
    inference: Arc<dyn InferenceClient>,
    transcoder: Arc<dyn ImageTranscoder>,
}

impl LineArtGenerator {
    pub fn new(inference: Arc<dyn InferenceClient>, transcoder: Arc<dyn ImageTranscoder>) -> Self {
        Self {
            inference,
            transcoder,
        }
    }

    /// Returns PNG line-art bytes for the request. Any failure aborts the
    /// whole pipeline.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>> {
        if !self.inference.is_configured() {
            return Err(Error::MissingCredential);
        }

        let payload = request.to_payload();
        debug!("Enhanced prompt: {}", payload.inputs);

        let raw = self.inference.text_to_image(&payload).await?;
        info!("Inference returned {} bytes, converting to line art", raw.len());

        let transcoder = Arc::clone(&self.transcoder);
        let png = tokio::task::spawn_blocking(move || transcoder.transcode(&raw))
            .await
            .map_err(|e| Error::internal(format!("Transcoding task failed: {}", e)))??;

        Ok(png)
    }
}
