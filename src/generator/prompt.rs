use crate::{
    Error, Result,
    inference::{InferenceParameters, InferencePayload},
};
use serde_json::Value;

pub const STYLE_SUFFIX: &str = ", simple line drawing, black and white, coloring book style, clean lines, minimalistic design, bold outlines, no shading, no gradients, no texture, no colors, flat style, no background shading, crisp and clear contours, blank white background";

pub const NEGATIVE_PROMPT: &str =
    "color, shading, realistic, detailed, complexity, texture, gradients";

pub const NUM_INFERENCE_STEPS: u32 = 30;
pub const GUIDANCE_SCALE: f32 = 7.5;
pub const DEFAULT_DIMENSION: u32 = 512;

pub fn enhance_prompt(prompt: &str) -> String {
    format!("{prompt}{STYLE_SUFFIX}")
}

/// A validated generation request.
///
/// Dimensions are kept as the JSON values the client sent; the inference
/// service enforces its own limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub width: Value,
    pub height: Value,
}

impl GenerationRequest {
    /// Validates the prompt and fills in default dimensions.
    ///
    /// A falsy dimension (`null`, `0`, `""`, `false`) counts as absent.
    pub fn new(prompt: Option<String>, width: Option<Value>, height: Option<Value>) -> Result<Self> {
        let prompt = prompt
            .filter(|p| !p.is_empty())
            .ok_or_else(|| Error::invalid_input("Prompt is required"))?;

        Ok(Self {
            prompt,
            width: dimension_or_default(width),
            height: dimension_or_default(height),
        })
    }

    pub fn to_payload(&self) -> InferencePayload {
        InferencePayload {
            inputs: enhance_prompt(&self.prompt),
            parameters: InferenceParameters {
                negative_prompt: NEGATIVE_PROMPT.to_string(),
                num_inference_steps: NUM_INFERENCE_STEPS,
                guidance_scale: GUIDANCE_SCALE,
                height: self.height.clone(),
                width: self.width.clone(),
            },
        }
    }
}

/// JavaScript-style truthiness for JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn dimension_or_default(value: Option<Value>) -> Value {
    value
        .filter(is_truthy)
        .unwrap_or_else(|| Value::from(DEFAULT_DIMENSION))
}
