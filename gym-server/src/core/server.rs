//! Server Implementation
//!
//! Binds the HTTP listener and serves the router until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();
        let app = crate::api::build_app().with_state(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Gym server listening on {}", addr);

        let shutdown_requested = Arc::new(Notify::new());
        let trigger = shutdown_requested.clone();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            trigger.notify_one();
        });
        let mut handle = tokio::spawn(async move { server.await });

        let budget = Duration::from_millis(self.config.shutdown_timeout_ms);
        let joined = tokio::select! {
            joined = &mut handle => joined,
            _ = shutdown_requested.notified() => {
                match tokio::time::timeout(budget, &mut handle).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        tracing::warn!(
                            timeout_ms = self.config.shutdown_timeout_ms,
                            "Graceful shutdown timed out, dropping open connections"
                        );
                        handle.abort();
                        return Ok(());
                    }
                }
            }
        };

        joined.map_err(std::io::Error::other)??;
        tracing::info!("Server stopped");
        Ok(())
    }
}
