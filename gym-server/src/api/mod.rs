//! API routes
//!
//! - [`health`] - liveness check
//! - [`members`] - member roster, renewals and receipts

pub mod health;
pub mod members;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Random UUID v4 request ids
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(members::router())
}

/// Routes with the full middleware stack. State is supplied by the caller.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - the admin UI is served from another origin
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Layers run outside-in: the id is set first, then copied onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
