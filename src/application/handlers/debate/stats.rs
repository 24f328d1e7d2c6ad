//! Per-user debate statistics and history.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::debate::{script, DebateError, DebateKind, Stance};
use crate::domain::foundation::{DebateId, Timestamp, TopicId, UserId};
use crate::domain::topic::{Category, Topic};
use crate::domain::user::Level;
use crate::ports::{DebateFilter, DebateRepository, TopicRepository, UserRepository};

pub const DEFAULT_HISTORY_LIMIT: u32 = 10;
pub const MAX_HISTORY_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub total_debates: u32,
    pub tests_passed: u32,
    /// Integer mean of recorded grades, 0 without any.
    pub average_grade: u32,
    pub best_grade: u32,
    pub score: u32,
    pub level: Level,
}

#[derive(Debug, Clone)]
pub struct UserStatsQuery {
    pub user_id: UserId,
}

pub struct UserStatsHandler {
    users: Arc<dyn UserRepository>,
    debates: Arc<dyn DebateRepository>,
}

impl UserStatsHandler {
    pub fn new(users: Arc<dyn UserRepository>, debates: Arc<dyn DebateRepository>) -> Self {
        Self { users, debates }
    }

    pub async fn handle(&self, query: UserStatsQuery) -> Result<UserStats, DebateError> {
        let debates = self
            .debates
            .find_by_user(&query.user_id, DebateFilter::All)
            .await?;
        let score = self
            .users
            .find_by_id(&query.user_id)
            .await?
            .map(|profile| profile.score())
            .unwrap_or_default();

        let grades: Vec<u32> = debates.iter().filter_map(|d| d.grade()).collect();
        let average_grade = if grades.is_empty() {
            0
        } else {
            grades.iter().sum::<u32>() / grades.len() as u32
        };

        Ok(UserStats {
            total_debates: debates.len() as u32,
            tests_passed: debates.iter().filter(|d| d.is_passed()).count() as u32,
            average_grade,
            best_grade: grades.iter().copied().max().unwrap_or(0),
            score,
            level: Level::for_score(score),
        })
    }
}

/// One line of the debate history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateRecap {
    pub debate_id: DebateId,
    pub topic_title: String,
    pub category: Category,
    pub difficulty: Level,
    pub kind: DebateKind,
    pub stance: Stance,
    pub grade: Option<u32>,
    pub started_at: Timestamp,
    /// `"<m>min <s>s"`, or `"N/A"` while running.
    pub duration: String,
}

#[derive(Debug, Clone)]
pub struct DebateHistoryQuery {
    pub user_id: UserId,
    pub limit: Option<u32>,
}

impl DebateHistoryQuery {
    /// Requested limit, defaulted and clamped to `1..=MAX_HISTORY_LIMIT`.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT) as usize
    }
}

pub struct DebateHistoryHandler {
    topics: Arc<dyn TopicRepository>,
    debates: Arc<dyn DebateRepository>,
}

impl DebateHistoryHandler {
    pub fn new(topics: Arc<dyn TopicRepository>, debates: Arc<dyn DebateRepository>) -> Self {
        Self { topics, debates }
    }

    /// Newest first.
    pub async fn handle(&self, query: DebateHistoryQuery) -> Result<Vec<DebateRecap>, DebateError> {
        let limit = query.effective_limit();
        let debates = self
            .debates
            .find_by_user(&query.user_id, DebateFilter::All)
            .await?;

        let mut topics: HashMap<TopicId, Topic> = HashMap::new();
        let mut recaps = Vec::with_capacity(limit.min(debates.len()));

        for debate in debates.into_iter().take(limit) {
            if !topics.contains_key(&debate.topic_id()) {
                let topic = self
                    .topics
                    .find_by_id(&debate.topic_id())
                    .await?
                    .ok_or_else(|| {
                        DebateError::infrastructure(format!(
                            "debate {} references missing topic {}",
                            debate.id(),
                            debate.topic_id()
                        ))
                    })?;
                topics.insert(topic.id(), topic);
            }
            let Some(topic) = topics.get(&debate.topic_id()) else {
                continue;
            };

            recaps.push(DebateRecap {
                debate_id: debate.id(),
                topic_title: topic.title().to_string(),
                category: topic.category(),
                difficulty: topic.difficulty(),
                kind: debate.kind(),
                stance: debate.stance(),
                grade: debate.grade(),
                started_at: debate.started_at(),
                duration: script::format_duration(debate.duration_secs()),
            });
        }

        Ok(recaps)
    }
}
