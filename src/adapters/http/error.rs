//! Error payloads shared by every HTTP module.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed.to_string(), message)
    }

    /// Infrastructure details stay in the logs.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError.to_string(), "Internal server error")
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound
        | ErrorCode::TopicNotFound
        | ErrorCode::DebateNotFound
        | ErrorCode::ReportNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ChatbotError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a module error given its code and display text.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    let status = status_for(code);
    let message: String = message.into();
    let body = if status.is_server_error() {
        tracing::error!(%code, error = %message, "Request failed");
        ErrorResponse::internal()
    } else {
        ErrorResponse::new(code.to_string(), message)
    };
    (status, Json(body)).into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

pub fn invalid_id(resource: &str) -> Response {
    bad_request(format!("Invalid {} ID", resource))
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    bad_request(rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    bad_request(rejection.body_text())
}
