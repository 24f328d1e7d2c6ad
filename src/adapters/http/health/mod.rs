//! Liveness endpoint.

use axum::{routing::get, Router};

/// GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// Routes mounted at `/api/health`. No authentication.
pub fn health_routes() -> Router {
    Router::new().route("/", get(health))
}
