use std::sync::Arc;

use sia_relay::channels::WhatsAppChannel;
use sia_relay::config::RelayConfig;
use sia_relay::llm::create_provider;
use sia_relay::pipeline::{RelayPipeline, ReplyGenerator};
use sia_relay::webhook::{RelayState, webhook_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // reqwest is built on rustls; pick the ring provider before any HTTPS call
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Arc::new(RelayConfig::from_env()?);
    for warning in config.startup_warnings() {
        tracing::warn!("{warning}");
    }

    let client = reqwest::Client::new();
    let llm = create_provider(&config, client.clone());
    let sender = Arc::new(WhatsAppChannel::new(client, &config));
    let pipeline = Arc::new(RelayPipeline::new(
        ReplyGenerator::new(llm, config.system_prompt.clone()),
        sender,
    ));

    let app = webhook_routes(RelayState {
        config: Arc::clone(&config),
        pipeline,
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        ai_enabled = config.ai_enabled(),
        version = env!("CARGO_PKG_VERSION"),
        "SIA server running"
    );

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received shutdown signal");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
