//! HTTP adapter for moderation reports.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateReportRequest, ProcessReportRequest, ReportResponse};
pub use handlers::ReportHandlers;
pub use routes::{admin_report_routes, report_routes};
