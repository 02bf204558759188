pub mod api;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod website;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use config::{AppConfig, ConfigError};
pub use gemini::GeminiClient;
pub use generator::{GenerationError, TextGenerator};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Any origin, method and header, with credentials.
///
/// A `*` wildcard is not allowed alongside credentials, so the request's own
/// values are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
