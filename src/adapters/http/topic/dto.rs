//! HTTP DTOs for topic endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::topic::TopicView;
use crate::domain::topic::{Category, Topic};
use crate::domain::user::Level;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTopicsParams {
    pub category: Option<Category>,
    pub difficulty: Option<Level>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub category: Category,
    pub difficulty: Level,
}

/// Every field is optional; a blank title counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTopicRequest {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub difficulty: Option<Level>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Level,
    pub created_at: String,
    /// Present on catalogue listings only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
}

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id().to_string(),
            title: topic.title().to_string(),
            category: topic.category(),
            difficulty: topic.difficulty(),
            created_at: topic.created_at().as_datetime().to_rfc3339(),
            accessible: None,
        }
    }
}

impl From<TopicView> for TopicResponse {
    fn from(view: TopicView) -> Self {
        Self {
            accessible: Some(view.accessible),
            ..Self::from(&view.topic)
        }
    }
}
