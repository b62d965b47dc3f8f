mod client;
mod types;

pub use client::{HuggingFaceClient, InferenceClient};
pub use types::{InferenceParameters, InferencePayload};
