mod prompt;
mod service;

pub use prompt::{
    DEFAULT_DIMENSION, GUIDANCE_SCALE, GenerationRequest, NEGATIVE_PROMPT, NUM_INFERENCE_STEPS,
    STYLE_SUFFIX, enhance_prompt, is_truthy,
};
pub use service::LineArtGenerator;
