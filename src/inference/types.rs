use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body of the text-to-image inference endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferencePayload {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceParameters {
    pub negative_prompt: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    /// Forwarded as sent by the client.
    pub height: Value,
    pub width: Value,
}
