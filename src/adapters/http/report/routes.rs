//! HTTP routes for report endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_report, get_report, list_reports, my_reports, process_report, ReportHandlers,
};

/// Routes mounted at `/api/reports`.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/", post(create_report))
        .route("/mine", get(my_reports))
        .route("/:id", get(get_report))
        .with_state(handlers)
}

/// Routes mounted at `/api/admin/reports`.
pub fn admin_report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/", get(list_reports))
        .route("/:id", put(process_report))
        .with_state(handlers)
}
