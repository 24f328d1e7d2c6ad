//! Topic aggregate.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::domain::foundation::{require_text, Timestamp, TopicId, ValidationError};
use crate::domain::user::Level;

/// Maximum length for topic titles.
pub const MAX_TITLE_LENGTH: usize = 200;

/// A subject users can debate, gated by difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    title: String,
    category: Category,
    difficulty: Level,
    created_at: Timestamp,
}

impl Topic {
    /// Create a topic.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` if the trimmed title is blank or over 200 characters
    pub fn new(title: &str, category: Category, difficulty: Level) -> Result<Self, ValidationError> {
        Ok(Self {
            id: TopicId::new(),
            title: require_text("title", title, MAX_TITLE_LENGTH)?,
            category,
            difficulty,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a topic from persistence (no validation).
    pub fn reconstitute(
        id: TopicId,
        title: String,
        category: Category,
        difficulty: Level,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            category,
            difficulty,
            created_at,
        }
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn difficulty(&self) -> Level {
        self.difficulty
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whether a user at `level` may debate this topic.
    pub fn is_accessible_at(&self, level: Level) -> bool {
        level.can_access(self.difficulty)
    }

    /// Apply a partial update. Blank titles are treated as absent.
    pub fn apply_changes(
        &mut self,
        title: Option<&str>,
        category: Option<Category>,
        difficulty: Option<Level>,
    ) -> Result<(), ValidationError> {
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = require_text("title", title, MAX_TITLE_LENGTH)?;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic() -> Topic {
        Topic::new("  AI will replace teachers ", Category::Computing, Level::Intermediate).unwrap()
    }

    #[test]
    fn new_trims_title() {
        assert_eq!(topic().title(), "AI will replace teachers");
    }

    #[test]
    fn new_rejects_blank_and_long_titles() {
        assert!(Topic::new("   ", Category::Art, Level::Beginner).is_err());
        let long = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(Topic::new(&long, Category::Art, Level::Beginner).is_err());
    }

    #[test]
    fn accessibility_follows_difficulty() {
        let t = topic();
        assert!(!t.is_accessible_at(Level::Beginner));
        assert!(t.is_accessible_at(Level::Intermediate));
        assert!(t.is_accessible_at(Level::Expert));
    }

    #[test]
    fn apply_changes_ignores_blank_title() {
        let mut t = topic();
        t.apply_changes(Some("  "), Some(Category::Music), None).unwrap();
        assert_eq!(t.title(), "AI will replace teachers");
        assert_eq!(t.category(), Category::Music);
        assert_eq!(t.difficulty(), Level::Intermediate);
    }

    #[test]
    fn apply_changes_validates_new_title() {
        let mut t = topic();
        let long = "y".repeat(MAX_TITLE_LENGTH + 5);
        assert!(t.apply_changes(Some(&long), None, None).is_err());
        t.apply_changes(Some("Music heals"), None, Some(Level::Beginner)).unwrap();
        assert_eq!(t.title(), "Music heals");
        assert_eq!(t.difficulty(), Level::Beginner);
    }
}
