#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

use tokio_util::sync::CancellationToken;
use voxrelay::config::Config;
use voxrelay::{Server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("info");

    // Load configuration from the environment
    let config = Config::from_env()?;

    tracing::info!(
        voice_id = %config.provider.voice_id,
        model_id = %config.provider.model_id,
        "starting voxrelay"
    );
    if config.provider.api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set; synthesis requests will fail");
    }

    // Build server
    let server = Server::new(config);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("voxrelay stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
