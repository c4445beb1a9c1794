use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::models::{BlogRequest, BlogResponse};
use crate::server::{ApiError, AppState};
use crate::stages::generate_blog;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET / - list the available endpoints
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Multi-Agent Blog Generator API",
        "endpoints": {
            "/generate": "POST - Generate blog",
            "/health": "GET - Health check"
        }
    }))
}

/// GET /health - always healthy, independent of the model credential
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /generate - run the three-stage pipeline
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<Json<BlogResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    async move {
        info!("Generating blog for {:?}", request.topic);
        match generate_blog(state.model.as_ref(), &request).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => {
                error!("Generation failed: {}", e);
                Err(ApiError::from(e))
            }
        }
    }
    .instrument(span)
    .await
}
