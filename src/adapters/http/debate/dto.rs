//! HTTP DTOs for debate endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::debate::{ChatbotStatus, DebateRecap, UserStats};
use crate::domain::debate::{Author, Debate, DebateKind, DebateStatus, Message, Stance};
use crate::domain::foundation::TopicId;
use crate::domain::topic::Category;
use crate::domain::user::Level;
use crate::ports::DebateFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct StartDebateRequest {
    pub topic_id: TopicId,
    pub stance: Stance,
    #[serde(alias = "type")]
    pub kind: DebateKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDebatesParams {
    #[serde(default)]
    pub status: DebateFilter,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeChatbotRequest {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct DebateResponse {
    pub id: String,
    pub topic_id: String,
    pub stance: Stance,
    pub kind: DebateKind,
    pub status: DebateStatus,
    pub started_at: String,
    pub duration_secs: Option<u32>,
    pub grade: Option<u32>,
    pub passed: bool,
}

impl From<&Debate> for DebateResponse {
    fn from(debate: &Debate) -> Self {
        Self {
            id: debate.id().to_string(),
            topic_id: debate.topic_id().to_string(),
            stance: debate.stance(),
            kind: debate.kind(),
            status: debate.status(),
            started_at: debate.started_at().as_datetime().to_rfc3339(),
            duration_secs: debate.duration_secs(),
            grade: debate.grade(),
            passed: debate.is_passed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub debate_id: String,
    /// `USER` or `CHATBOT`.
    pub sender: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub content: String,
    pub sent_at: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        let (sender, user_id) = match message.author() {
            Author::Participant(id) => ("USER", Some(id.to_string())),
            Author::Chatbot => ("CHATBOT", None),
        };
        Self {
            id: message.id().to_string(),
            debate_id: message.debate_id().to_string(),
            sender,
            user_id,
            content: message.content().to_string(),
            sent_at: message.sent_at().as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StartDebateResponse {
    pub debate: DebateResponse,
    pub topic_title: String,
    pub introduction: MessageResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub message: MessageResponse,
    pub reply: MessageResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinishDebateResponse {
    pub debate: DebateResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<MessageResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub debate: DebateResponse,
    pub evaluation: MessageResponse,
    pub grade: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_debates: u32,
    pub tests_passed: u32,
    pub average_grade: u32,
    pub best_grade: u32,
    pub score: u32,
    pub level: Level,
}

impl From<UserStats> for StatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_debates: stats.total_debates,
            tests_passed: stats.tests_passed,
            average_grade: stats.average_grade,
            best_grade: stats.best_grade,
            score: stats.score,
            level: stats.level,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DebateRecapResponse {
    pub debate_id: String,
    pub topic_title: String,
    pub category: Category,
    pub difficulty: Level,
    pub kind: DebateKind,
    pub stance: Stance,
    pub grade: Option<u32>,
    pub started_at: String,
    pub duration: String,
}

impl From<DebateRecap> for DebateRecapResponse {
    fn from(recap: DebateRecap) -> Self {
        Self {
            debate_id: recap.debate_id.to_string(),
            topic_title: recap.topic_title,
            category: recap.category,
            difficulty: recap.difficulty,
            kind: recap.kind,
            stance: recap.stance,
            grade: recap.grade,
            started_at: recap.started_at.as_datetime().to_rfc3339(),
            duration: recap.duration,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatbotStatusResponse {
    /// `healthy` or `unhealthy`.
    pub status: &'static str,
    pub service: &'static str,
    pub active_sessions: usize,
}

impl From<ChatbotStatus> for ChatbotStatusResponse {
    fn from(status: ChatbotStatus) -> Self {
        Self {
            status: if status.healthy { "healthy" } else { "unhealthy" },
            service: status.service,
            active_sessions: status.active_sessions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeChatbotResponse {
    pub result: String,
}
