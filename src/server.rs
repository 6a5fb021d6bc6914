use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use http::StatusCode;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::cors;
use crate::provider::elevenlabs::ElevenLabs;

/// Assembled relay with routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the relay from configuration
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(ElevenLabs::new(config.provider));

        let app = Router::new()
            .route("/", axum::routing::get(root_handler))
            .merge(crate::endpoint_router().with_state(provider))
            .layer(TraceLayer::new_for_http())
            .layer(cors::cors_layer(&config.cors));

        Self {
            router: app,
            listen_address: config.listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "relay listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Static confirmation for health-style probes
async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, "voxrelay TTS backend is running")
}
