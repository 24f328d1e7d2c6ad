//! Value types describing a debate's setup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Side of the motion a participant defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stance {
    For,
    Against,
}

impl Stance {
    /// The side the chatbot takes against this one.
    pub fn opposite(&self) -> Stance {
        match self {
            Stance::For => Stance::Against,
            Stance::Against => Stance::For,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::For => "FOR",
            Stance::Against => "AGAINST",
        }
    }

    /// French label used in chatbot-facing text.
    pub fn label_fr(&self) -> &'static str {
        match self {
            Stance::For => "POUR",
            Stance::Against => "CONTRE",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOR" => Ok(Stance::For),
            "AGAINST" => Ok(Stance::Against),
            _ => Err(ValidationError::invalid_value(
                "stance",
                format!("unknown stance '{}'", s),
            )),
        }
    }
}

/// Whether a debate is practice or graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebateKind {
    Training,
    Test,
}

impl DebateKind {
    pub fn chatbot_mode(&self) -> ChatbotMode {
        match self {
            DebateKind::Training => ChatbotMode::Train,
            DebateKind::Test => ChatbotMode::Score,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, DebateKind::Test)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DebateKind::Training => "TRAINING",
            DebateKind::Test => "TEST",
        }
    }
}

impl fmt::Display for DebateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebateKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRAINING" => Ok(DebateKind::Training),
            "TEST" => Ok(DebateKind::Test),
            _ => Err(ValidationError::invalid_value(
                "kind",
                format!("unknown debate kind '{}'", s),
            )),
        }
    }
}

/// Behaviour requested from the chatbot for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotMode {
    /// Free sparring.
    Train,
    /// Graded run; the chatbot tallies a final score on "fin du débat".
    Score,
}

impl ChatbotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatbotMode::Train => "train",
            ChatbotMode::Score => "score",
        }
    }
}

impl fmt::Display for ChatbotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state, derived from whether a duration has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebateStatus {
    InProgress,
    Finished,
}
