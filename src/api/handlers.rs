use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{website, AppState};

use super::models::{ErrorResponse, GenerateRequest, GenerateResponse, StatusResponse};

pub const GENERATION_FAILED: &str = "Failed to generate website code.";
pub const RUNNING_MESSAGE: &str = "AI Website Generator API is running.";

// Failures still answer 200; callers distinguish by the `error` field.
pub async fn generate_website(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    tracing::info!(prompt = %payload.prompt, "received prompt");

    match website::generate_website(state.generator.as_ref(), &payload.prompt).await {
        Ok(code) => {
            tracing::info!(bytes = code.len(), "website code generated");
            Json(GenerateResponse::Code { code })
        }
        Err(err) => {
            tracing::error!(error = %err, "website generation failed");
            Json(GenerateResponse::Error {
                error: GENERATION_FAILED.to_string(),
            })
        }
    }
}

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: RUNNING_MESSAGE.to_string(),
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
