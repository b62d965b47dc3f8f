use super::MockInferenceClient;
use axum::{Router, body::Body, http::Response};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lineart_proxy::{
    config::CorsConfig,
    generator::LineArtGenerator,
    lineart::LineArtTranscoder,
    server::{self, handlers::AppState},
};
use std::io::Cursor;
use std::sync::Arc;

/// A small, deliberately colorful PNG standing in for model output
pub fn sample_png() -> Vec<u8> {
    let image = RgbImage::from_fn(16, 12, |x, y| {
        Rgb([(x * 15) as u8, (y * 20) as u8, 255 - (x * y) as u8])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode sample PNG");
    bytes
}

pub fn create_generator(mock: &MockInferenceClient) -> LineArtGenerator {
    LineArtGenerator::new(Arc::new(mock.clone()), Arc::new(LineArtTranscoder::new()))
}

/// Create the full router around a mock inference client
pub fn create_test_app(mock: &MockInferenceClient) -> Router {
    create_test_app_with_cors(mock, &CorsConfig::default())
}

pub fn create_test_app_with_cors(mock: &MockInferenceClient, cors: &CorsConfig) -> Router {
    let state = AppState {
        generator: Arc::new(create_generator(mock)),
    };
    server::router(state, cors).expect("Failed to build router")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Response body is not JSON")
}
