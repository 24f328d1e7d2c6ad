//! Debate aggregate.
//!
//! A debate pits one user against the chatbot on a topic. It is in progress
//! until a duration is recorded; test debates may additionally receive a
//! single grade.

use serde::{Deserialize, Serialize};

use super::{DebateError, DebateKind, DebateStatus, Stance};
use crate::domain::foundation::{DebateId, Timestamp, TopicId, UserId};

/// Highest grade a test can receive.
pub const MAX_GRADE: u32 = 100;

/// Grade from which a test counts as passed.
pub const PASSING_GRADE: u32 = 50;

/// Debate aggregate.
///
/// # Invariants
///
/// - finished iff `duration_secs` is set
/// - only tests carry a grade, at most once, within `0..=100`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debate {
    id: DebateId,
    user_id: UserId,
    topic_id: TopicId,
    stance: Stance,
    kind: DebateKind,
    started_at: Timestamp,
    duration_secs: Option<u32>,
    grade: Option<u32>,
}

impl Debate {
    /// Start a new debate now.
    pub fn start(user_id: UserId, topic_id: TopicId, stance: Stance, kind: DebateKind) -> Self {
        Self {
            id: DebateId::new(),
            user_id,
            topic_id,
            stance,
            kind,
            started_at: Timestamp::now(),
            duration_secs: None,
            grade: None,
        }
    }

    /// Reconstitute a debate from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DebateId,
        user_id: UserId,
        topic_id: TopicId,
        stance: Stance,
        kind: DebateKind,
        started_at: Timestamp,
        duration_secs: Option<u32>,
        grade: Option<u32>,
    ) -> Self {
        Self {
            id,
            user_id,
            topic_id,
            stance,
            kind,
            started_at,
            duration_secs,
            grade,
        }
    }

    pub fn id(&self) -> DebateId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn chatbot_stance(&self) -> Stance {
        self.stance.opposite()
    }

    pub fn kind(&self) -> DebateKind {
        self.kind
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn duration_secs(&self) -> Option<u32> {
        self.duration_secs
    }

    pub fn grade(&self) -> Option<u32> {
        self.grade
    }

    pub fn status(&self) -> DebateStatus {
        if self.duration_secs.is_some() {
            DebateStatus::Finished
        } else {
            DebateStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.duration_secs.is_some()
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// A graded test with at least the passing grade.
    pub fn is_passed(&self) -> bool {
        self.kind.is_test() && self.grade.is_some_and(|g| g >= PASSING_GRADE)
    }

    /// Fail unless the debate is still running.
    pub fn ensure_in_progress(&self) -> Result<(), DebateError> {
        if self.is_finished() {
            return Err(DebateError::AlreadyFinished(self.id));
        }
        Ok(())
    }

    /// Close the debate, recording whole seconds elapsed since it started.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinished` if a duration was already recorded
    pub fn finish(&mut self, at: Timestamp) -> Result<u32, DebateError> {
        self.ensure_in_progress()?;
        let secs = at.seconds_since(&self.started_at);
        self.duration_secs = Some(secs);
        Ok(secs)
    }

    /// Record the grade of a test.
    ///
    /// # Errors
    ///
    /// - `NotATest` for training debates
    /// - `NotFinished` while the debate is still running
    /// - `AlreadyGraded` if a grade exists
    /// - `Validation` if the grade exceeds 100
    pub fn record_grade(&mut self, grade: u32) -> Result<(), DebateError> {
        self.ensure_gradable()?;
        if grade > MAX_GRADE {
            return Err(DebateError::validation(
                "grade",
                format!("must be at most {}", MAX_GRADE),
            ));
        }
        self.grade = Some(grade);
        Ok(())
    }

    /// Fail unless this is a finished test without a grade yet.
    pub fn ensure_gradable(&self) -> Result<(), DebateError> {
        if !self.kind.is_test() {
            return Err(DebateError::NotATest(self.id));
        }
        if !self.is_finished() {
            return Err(DebateError::NotFinished(self.id));
        }
        if self.grade.is_some() {
            return Err(DebateError::AlreadyGraded(self.id));
        }
        Ok(())
    }
}
