//! HTTP routes for topic endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{create_topic, delete_topic, list_topics, update_topic, TopicHandlers};

/// Routes mounted at `/api/topics`.
pub fn topic_routes(handlers: TopicHandlers) -> Router {
    Router::new()
        .route("/", get(list_topics))
        .with_state(handlers)
}

/// Routes mounted at `/api/admin/topics`.
pub fn admin_topic_routes(handlers: TopicHandlers) -> Router {
    Router::new()
        .route("/", post(create_topic))
        .route("/:id", put(update_topic).delete(delete_topic))
        .with_state(handlers)
}
