// HTTP server exposing the expression detection endpoint

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use bytes::Bytes;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{ExpressionMapperError, Result};
use crate::expression::normalize;
use crate::inference::InferenceClient;
use crate::models::ExpressionResponse;

/// Full camera frames exceed the framework's default body limit
const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inference: Arc<InferenceClient>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            inference: Arc::new(InferenceClient::new(&config.inference)),
        }
    }
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/expression", post(detect_expression))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(&config);
    let router = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("expression mapper listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    "Expression mapper is running"
}

/// POST /api/expression - Detect the expression on an uploaded frame
///
/// Accepts a multipart form with a single binary `image` field, forwards
/// the frame to the inference service, and reports the canonical label.
/// Classification ambiguity never surfaces as an error; only a missing
/// image or an upstream failure does.
async fn detect_expression(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExpressionResponse>> {
    let mut image: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            image = Some(field.bytes().await?);
            break;
        }
    }

    let image = image.ok_or(ExpressionMapperError::MissingImage)?;

    let raw = state.inference.submit(&image).await?;
    let expression = normalize(&raw);

    Ok(Json(ExpressionResponse { expression }))
}
