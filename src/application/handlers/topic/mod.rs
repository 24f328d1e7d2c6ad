//! Topic handlers - Browsing and administering debate topics.

mod list_topics;
mod manage_topics;

pub use list_topics::{ListTopicsHandler, ListTopicsQuery, TopicView};
pub use manage_topics::{
    CreateTopicCommand, CreateTopicHandler, DeleteTopicCommand, DeleteTopicHandler,
    UpdateTopicCommand, UpdateTopicHandler,
};

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::topic::TopicError;

fn require_admin(user: &AuthenticatedUser) -> Result<(), TopicError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(TopicError::Forbidden)
    }
}
