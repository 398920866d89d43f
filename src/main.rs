use std::sync::Arc;

use dreamtube_api::{
    api::{create_router, AppState},
    config::Config,
    services::generative::GeminiBackend,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dreamtube_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; searches and comments will come back empty");
    }

    let backend = Arc::new(GeminiBackend::from_config(&config));
    let state = AppState::new(backend);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, model = %config.gemini_model, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
