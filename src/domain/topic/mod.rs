//! Debate topics and their categories.

mod aggregate;
mod category;
mod errors;

pub use aggregate::{Topic, MAX_TITLE_LENGTH};
pub use category::Category;
pub use errors::TopicError;
