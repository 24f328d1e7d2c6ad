//! User profile aggregate.

use serde::{Deserialize, Serialize};

use super::Level;
use crate::domain::foundation::{AuthenticatedUser, Role, Timestamp, UserId};

/// A user known to the arena, provisioned on first authenticated request.
///
/// # Invariants
///
/// - `score` only grows, by the grades of passed and failed tests alike
/// - `level` is always derived from `score`, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    email: String,
    display_name: Option<String>,
    role: Role,
    score: u32,
    registered_at: Timestamp,
}

impl UserProfile {
    /// Profile for a subject seen for the first time.
    pub fn register(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            score: 0,
            registered_at: Timestamp::now(),
        }
    }

    /// Reconstitute a profile from persistence.
    pub fn reconstitute(
        id: UserId,
        email: String,
        display_name: Option<String>,
        role: Role,
        score: u32,
        registered_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            role,
            score,
            registered_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn registered_at(&self) -> Timestamp {
        self.registered_at
    }

    pub fn level(&self) -> Level {
        Level::for_score(self.score)
    }

    pub fn points_to_next_level(&self) -> Option<u32> {
        Level::points_to_next(self.score)
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
