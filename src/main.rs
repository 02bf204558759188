use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use website_generator::{build_app, run_server, AppConfig, AppState, GeminiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "website_generator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(model = %config.gemini_model, "using Gemini model");

    let state = AppState::new(GeminiClient::from_config(&config));
    let app = build_app(state);

    run_server(app, &config.host, config.port).await?;
    Ok(())
}
