use super::types::{ErrorResponse, GenerateRequest, HealthResponse};
use crate::{
    Error,
    generator::{GenerationRequest, LineArtGenerator},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<LineArtGenerator>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let body = GenerateRequest::from_body(&headers, &body).map_err(|e| {
        warn!("Rejected generate request {}: {}", request_id, e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details(
                "Invalid request body",
                e.to_string(),
            )),
        )
    })?;

    let request = GenerationRequest::new(body.prompt_text(), body.width, body.height)
        .map_err(|e| error_response(&e))?;

    info!(
        "Received generate request {} ({}x{}) for prompt: {}",
        request_id, request.width, request.height, request.prompt
    );

    match state.generator.generate(&request).await {
        Ok(png) => {
            info!("Generate request {} produced {} PNG bytes", request_id, png.len());
            Ok(([(header::CONTENT_TYPE, "image/png")], png))
        }
        Err(e) => {
            error!("Generate request {} failed: {}", request_id, e);
            Err(error_response(&e))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

pub async fn method_not_allowed() -> ApiError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method Not Allowed")),
    )
}

/// Maps a pipeline failure to its HTTP status and JSON body.
pub fn error_response(err: &Error) -> ApiError {
    match err {
        Error::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(message.clone())),
        ),
        Error::MissingCredential => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_details(
                "Failed to generate image",
                other.to_string(),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let (status, Json(body)) = error_response(&Error::invalid_input("Prompt is required"));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Prompt is required");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_missing_credential_has_no_details() {
        let (status, Json(body)) = error_response(&Error::MissingCredential);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Hugging Face token not configured");
        assert!(body.details.is_none());
    }

    #[test]
    fn test_upstream_failure_carries_details() {
        let (status, Json(body)) =
            error_response(&Error::upstream(503, "{\"error\":\"Model is loading\"}"));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to generate image");
        assert!(body.details.unwrap().contains("Model is loading"));
    }
}
