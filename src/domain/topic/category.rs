use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Subject area of a debate topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Art,
    Politics,
    Culture,
    Computing,
    Trending,
    Industry,
    Philosophy,
    Health,
    History,
    Music,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Art,
        Category::Politics,
        Category::Culture,
        Category::Computing,
        Category::Trending,
        Category::Industry,
        Category::Philosophy,
        Category::Health,
        Category::History,
        Category::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Art => "ART",
            Category::Politics => "POLITICS",
            Category::Culture => "CULTURE",
            Category::Computing => "COMPUTING",
            Category::Trending => "TRENDING",
            Category::Industry => "INDUSTRY",
            Category::Philosophy => "PHILOSOPHY",
            Category::Health => "HEALTH",
            Category::History => "HISTORY",
            Category::Music => "MUSIC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_value("category", format!("unknown category '{}'", s))
            })
    }
}
