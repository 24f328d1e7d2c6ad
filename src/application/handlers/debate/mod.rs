//! Debate handlers - Running debates against the chatbot.

mod cancel_debate;
mod chat_relay;
mod chatbot_status;
mod finish_debate;
mod queries;
mod send_message;
mod start_debate;
mod stats;

pub use cancel_debate::{CancelDebateCommand, CancelDebateHandler};
pub use chat_relay::ChatRelay;
pub use chatbot_status::{
    ChatbotStatus, ChatbotStatusHandler, ProbeChatbotCommand, ProbeChatbotHandler,
    CHATBOT_SERVICE_NAME,
};
pub use evaluate_test::{EvaluateTestCommand, EvaluateTestHandler, EvaluateTestResult};
pub use finish_debate::{FinishDebateCommand, FinishDebateHandler, FinishDebateResult};
pub use queries::{
    GetDebateHandler, GetDebateQuery, GetMessagesHandler, GetMessagesQuery, ListDebatesHandler,
    ListDebatesQuery,
};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
pub use start_debate::{StartDebateCommand, StartDebateHandler, StartDebateResult};
pub use stats::{
    DebateHistoryHandler, DebateHistoryQuery, DebateRecap, UserStats, UserStatsHandler,
    UserStatsQuery, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};

use crate::domain::debate::{Debate, DebateError};
use crate::domain::foundation::{DebateId, UserId};
use crate::domain::user::Level;
use crate::ports::{DebateRepository, UserRepository};

/// Current level of a user. Unknown users count as fresh ones.
pub(crate) async fn level_of(
    users: &dyn UserRepository,
    user_id: &UserId,
) -> Result<Level, DebateError> {
    let score = users
        .find_by_id(user_id)
        .await?
        .map(|profile| profile.score())
        .unwrap_or_default();
    Ok(Level::for_score(score))
}

/// Load a debate owned by `user_id`. Debates of other users are not found.
pub(crate) async fn load_owned_debate(
    debates: &dyn DebateRepository,
    debate_id: DebateId,
    user_id: &UserId,
) -> Result<Debate, DebateError> {
    debates
        .find_by_id(&debate_id)
        .await?
        .filter(|debate| debate.is_owned_by(user_id))
        .ok_or(DebateError::NotFound(debate_id))
}
