//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, invalid_id, json_rejection, query_rejection};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::report::{
    CreateReportCommand, CreateReportHandler, GetReportHandler, GetReportQuery,
    ListReportsHandler, ListReportsQuery, MyReportsHandler, MyReportsQuery, ProcessReportCommand,
    ProcessReportHandler,
};
use crate::domain::foundation::ReportId;
use crate::domain::report::{Report, ReportError};
use crate::ports::ReportFilter;

use super::dto::{CreateReportRequest, ListReportsParams, ProcessReportRequest, ReportResponse};

#[derive(Clone)]
pub struct ReportHandlers {
    pub create: Arc<CreateReportHandler>,
    pub mine: Arc<MyReportsHandler>,
    pub get: Arc<GetReportHandler>,
    pub list: Arc<ListReportsHandler>,
    pub process: Arc<ProcessReportHandler>,
}

fn parse_report_id(raw: &str) -> Result<ReportId, Response> {
    raw.parse::<ReportId>().map_err(|_| invalid_id("report"))
}

fn report_list(reports: &[Report]) -> Response {
    let response: Vec<ReportResponse> = reports.iter().map(ReportResponse::from).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/reports - File a report
pub async fn create_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateReportCommand {
        user_id: user.id,
        title: req.title,
        description: req.description,
        problem_type: req.problem_type,
        debate_id: req.debate_id,
    };

    match handlers.create.handle(cmd).await {
        Ok(report) => (StatusCode::CREATED, Json(ReportResponse::from(&report))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/reports/mine - Reports filed by the caller
pub async fn my_reports(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.mine.handle(MyReportsQuery { user_id: user.id }).await {
        Ok(reports) => report_list(&reports),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/reports/:id - One of the caller's reports
pub async fn get_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetReportQuery {
        user_id: user.id,
        report_id,
    };

    match handlers.get.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(&report))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/admin/reports?status=&problem_type= - Moderation queue
pub async fn list_reports(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListReportsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListReportsQuery {
        user,
        filter: ReportFilter {
            status: params.status,
            problem_type: params.problem_type,
        },
    };

    match handlers.list.handle(query).await {
        Ok(reports) => report_list(&reports),
        Err(e) => handle_report_error(e),
    }
}

/// PUT /api/admin/reports/:id - Record a moderation decision
pub async fn process_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
    payload: Result<Json<ProcessReportRequest>, JsonRejection>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ProcessReportCommand {
        user,
        report_id,
        status: req.status,
        comment: req.comment,
    };

    match handlers.process.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(&report))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

fn handle_report_error(error: ReportError) -> Response {
    error_response(error.code(), error.to_string())
}
