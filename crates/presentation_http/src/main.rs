//! PiGlance describe relay
//!
//! Main entry point for the describe relay server.

use std::sync::Arc;

use ai_vision::{DescribeEngine, LlavaClient};
use infrastructure::AppConfig;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "piglance_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🔭 PiGlance relay v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // A bad endpoint should stop the process here, not surface on the
    // first request
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let relay_config = config.relay.clone();

    info!(
        host = %relay_config.host,
        port = %relay_config.port,
        upstream = %relay_config.llava.base_url,
        "Configuration loaded"
    );

    // Initialize the completion client
    let llava = LlavaClient::new(relay_config.llava.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize completion client: {e}"))?;
    let describer: Arc<dyn DescribeEngine> = Arc::new(llava);

    let state = AppState::new(describer);

    // Build router with middleware (order matters: first added = outermost)
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(relay_config.max_body_bytes));

    // Start server
    let addr = relay_config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Relay listening on http://{}", addr);
    info!("🧠 Upstream completion server: {}", relay_config.llava.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Relay shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
