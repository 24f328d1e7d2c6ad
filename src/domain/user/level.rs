//! Skill levels derived from a user's accumulated score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Skill level, also used as topic difficulty.
///
/// Ordering follows progression: `Beginner < Intermediate < Advanced < Expert`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

const INTERMEDIATE_THRESHOLD: u32 = 100;
const ADVANCED_THRESHOLD: u32 = 300;
const EXPERT_THRESHOLD: u32 = 600;

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Expert,
    ];

    /// Level reached with the given score.
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= EXPERT_THRESHOLD => Level::Expert,
            s if s >= ADVANCED_THRESHOLD => Level::Advanced,
            s if s >= INTERMEDIATE_THRESHOLD => Level::Intermediate,
            _ => Level::Beginner,
        }
    }

    /// Score needed to enter this level.
    pub fn threshold(&self) -> u32 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => INTERMEDIATE_THRESHOLD,
            Level::Advanced => ADVANCED_THRESHOLD,
            Level::Expert => EXPERT_THRESHOLD,
        }
    }

    pub fn next(&self) -> Option<Level> {
        match self {
            Level::Beginner => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Advanced),
            Level::Advanced => Some(Level::Expert),
            Level::Expert => None,
        }
    }

    /// Points missing before the next level, `None` once Expert.
    pub fn points_to_next(score: u32) -> Option<u32> {
        Level::for_score(score)
            .next()
            .map(|next| next.threshold().saturating_sub(score))
    }

    /// Whether a user at this level may take on a topic of `difficulty`.
    pub fn can_access(&self, difficulty: Level) -> bool {
        difficulty <= *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "BEGINNER",
            Level::Intermediate => "INTERMEDIATE",
            Level::Advanced => "ADVANCED",
            Level::Expert => "EXPERT",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_value("level", format!("unknown level '{}'", s)))
    }
}
