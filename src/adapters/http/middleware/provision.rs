//! Registers users the first time one of their requests is authenticated.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::UserRepository;

pub type ProvisionState = Arc<dyn UserRepository>;

/// Must run after `auth_middleware`. Anonymous requests pass through.
pub async fn provision_middleware(
    State(users): State<ProvisionState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(user) = request.extensions().get::<AuthenticatedUser>() {
        if let Err(e) = users.ensure_registered(user).await {
            tracing::error!(user_id = %user.id, error = %e, "User provisioning failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response();
        }
    }
    next.run(request).await
}
