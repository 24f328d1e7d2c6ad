//! HTTP handlers for topic endpoints.

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
use crate::application::handlers::topic::{
    CreateTopicCommand, CreateTopicHandler, DeleteTopicCommand, DeleteTopicHandler,
    ListTopicsHandler, ListTopicsQuery, UpdateTopicCommand, UpdateTopicHandler,
};
use crate::domain::foundation::TopicId;
use crate::domain::topic::TopicError;
use crate::ports::TopicFilter;

use super::dto::{CreateTopicRequest, ListTopicsParams, TopicResponse, UpdateTopicRequest};

#[derive(Clone)]
pub struct TopicHandlers {
    pub list: Arc<ListTopicsHandler>,
    pub create: Arc<CreateTopicHandler>,
    pub update: Arc<UpdateTopicHandler>,
    pub delete: Arc<DeleteTopicHandler>,
}

fn parse_topic_id(raw: &str) -> Result<TopicId, Response> {
    raw.parse::<TopicId>().map_err(|_| invalid_id("topic"))
}

/// GET /api/topics - Catalogue with per-user accessibility
pub async fn list_topics(
    State(handlers): State<TopicHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListTopicsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListTopicsQuery {
        user_id: user.id,
        filter: TopicFilter {
            category: params.category,
            difficulty: params.difficulty,
        },
    };

    match handlers.list.handle(query).await {
        Ok(views) => {
            let response: Vec<TopicResponse> = views.into_iter().map(TopicResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_topic_error(e),
    }
}

/// POST /api/admin/topics - Create a topic
pub async fn create_topic(
    State(handlers): State<TopicHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateTopicRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateTopicCommand {
        user,
        title: req.title,
        category: req.category,
        difficulty: req.difficulty,
    };

    match handlers.create.handle(cmd).await {
        Ok(topic) => (StatusCode::CREATED, Json(TopicResponse::from(&topic))).into_response(),
        Err(e) => handle_topic_error(e),
    }
}

/// PUT /api/admin/topics/:id - Partially update a topic
pub async fn update_topic(
    State(handlers): State<TopicHandlers>,
    RequireAuth(user): RequireAuth,
    Path(topic_id): Path<String>,
    payload: Result<Json<UpdateTopicRequest>, JsonRejection>,
) -> Response {
    let topic_id = match parse_topic_id(&topic_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = UpdateTopicCommand {
        user,
        topic_id,
        title: req.title,
        category: req.category,
        difficulty: req.difficulty,
    };

    match handlers.update.handle(cmd).await {
        Ok(topic) => (StatusCode::OK, Json(TopicResponse::from(&topic))).into_response(),
        Err(e) => handle_topic_error(e),
    }
}

/// DELETE /api/admin/topics/:id - Delete an unused topic
pub async fn delete_topic(
    State(handlers): State<TopicHandlers>,
    RequireAuth(user): RequireAuth,
    Path(topic_id): Path<String>,
) -> Response {
    let topic_id = match parse_topic_id(&topic_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete
        .handle(DeleteTopicCommand { user, topic_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_topic_error(e),
    }
}

fn handle_topic_error(error: TopicError) -> Response {
    error_response(error.code(), error.to_string())
}
