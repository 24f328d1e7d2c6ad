//! HTTP adapter for topics.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTopicRequest, TopicResponse, UpdateTopicRequest};
pub use handlers::TopicHandlers;
pub use routes::{admin_topic_routes, topic_routes};
