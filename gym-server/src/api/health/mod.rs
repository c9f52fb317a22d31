//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness and database reachability |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: bool,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    if !database {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        service: "gym-server",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
