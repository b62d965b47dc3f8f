pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, CorsConfig},
    generator::LineArtGenerator,
    inference::{HuggingFaceClient, InferenceClient},
    lineart::LineArtTranscoder,
};
use axum::{
    Router,
    body::Body,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{MethodRouter, get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

pub async fn run(config: Config) -> Result<()> {
    let inference = HuggingFaceClient::new(&config.inference)?;
    if !inference.is_configured() {
        warn!("HUGGING_FACE_TOKEN is not set, generate requests will be rejected");
    }

    let generator = LineArtGenerator::new(Arc::new(inference), Arc::new(LineArtTranscoder::new()));
    let app_state = AppState {
        generator: Arc::new(generator),
    };

    let app = router(app_state, &config.server.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the HTTP surface: generate (under both deployment paths), health, CORS.
pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let generate_route = || -> MethodRouter<AppState> {
        post(handlers::generate).fallback(handlers::method_not_allowed)
    };

    Ok(Router::new()
        .route("/generate", generate_route())
        .route("/api/generate", generate_route())
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(cors_layer(cors)?)
        .layer(middleware::from_fn(json_preflight))
        .layer(TraceLayer::new_for_http()))
}

pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if cors.allowed_origin == "*" {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origin = HeaderValue::from_str(&cors.allowed_origin).map_err(|_| {
        Error::config(format!("Invalid CORS origin: '{}'", cors.allowed_origin))
    })?;

    Ok(layer
        .allow_origin(AllowOrigin::exact(origin))
        .allow_credentials(true))
}

/// Replaces the empty body of CORS preflight responses with `{}`.
async fn json_preflight(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;
    let response = next.run(request).await;

    if !is_preflight || response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from("{}"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
