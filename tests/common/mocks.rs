use async_trait::async_trait;
use lineart_proxy::{
    Error, Result,
    inference::{InferenceClient, InferencePayload},
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockOutcome {
    Image(Vec<u8>),
    Upstream { status: u16, details: String },
}

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub configured: bool,
    pub outcome: MockOutcome,
    pub requests: Arc<Mutex<Vec<InferencePayload>>>,
}

impl MockInferenceClient {
    pub fn returning_image(bytes: Vec<u8>) -> Self {
        Self {
            configured: true,
            outcome: MockOutcome::Image(bytes),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_with(status: u16, details: &str) -> Self {
        Self {
            configured: true,
            outcome: MockOutcome::Upstream {
                status,
                details: details.to_string(),
            },
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unconfigured(self) -> Self {
        Self {
            configured: false,
            ..self
        }
    }

    pub fn get_requests(&self) -> Vec<InferencePayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn text_to_image(&self, payload: &InferencePayload) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(payload.clone());

        match &self.outcome {
            MockOutcome::Image(bytes) => Ok(bytes.clone()),
            MockOutcome::Upstream { status, details } => {
                Err(Error::upstream(*status, details.clone()))
            }
        }
    }
}
