use roomchat::{
    app::build_router, AppError, AppState, InMemoryConnectionManager, InMemorySessionRegistry,
    ServerConfig, WordListFilter,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomchat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting room chat server");

    let config = ServerConfig::from_env()?;

    let content_filter = WordListFilter::with_extra_words(&config.blocked_words);
    info!(blocked_words = content_filter.len(), "Profanity filter loaded");

    let app_state = AppState::new(
        Arc::new(InMemorySessionRegistry::new()),
        Arc::new(InMemoryConnectionManager::new()),
        Arc::new(content_filter),
    );

    let app = build_router(app_state, config.public_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Chat server is running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
