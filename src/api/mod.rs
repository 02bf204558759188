mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{generate_website, not_found, root, GENERATION_FAILED, RUNNING_MESSAGE};
#[allow(unused_imports)]
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse, StatusResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/generate-website", post(generate_website))
        .fallback(not_found)
        .with_state(state)
}
