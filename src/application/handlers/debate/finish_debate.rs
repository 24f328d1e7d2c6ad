//! FinishDebateHandler - Closes a debate.
//!
//! Training debates drop their chatbot session immediately. Test debates keep
//! it so the evaluation can ask the same conversation for its final score.

use std::sync::Arc;

use super::{load_owned_debate, ChatRelay};
use crate::domain::debate::{script, Debate, DebateError, Message};
use crate::domain::foundation::{DebateId, Timestamp, UserId};
use crate::ports::{DebateRepository, MessageRepository};

#[derive(Debug, Clone)]
pub struct FinishDebateCommand {
    pub user_id: UserId,
    pub debate_id: DebateId,
}

#[derive(Debug, Clone)]
pub struct FinishDebateResult {
    pub debate: Debate,
    /// Waiting notice posted for tests.
    pub notice: Option<Message>,
}

pub struct FinishDebateHandler {
    debates: Arc<dyn DebateRepository>,
    messages: Arc<dyn MessageRepository>,
    relay: Arc<ChatRelay>,
}

impl FinishDebateHandler {
    pub fn new(
        debates: Arc<dyn DebateRepository>,
        messages: Arc<dyn MessageRepository>,
        relay: Arc<ChatRelay>,
    ) -> Self {
        Self {
            debates,
            messages,
            relay,
        }
    }

    pub async fn handle(&self, cmd: FinishDebateCommand) -> Result<FinishDebateResult, DebateError> {
        let mut debate =
            load_owned_debate(self.debates.as_ref(), cmd.debate_id, &cmd.user_id).await?;

        let duration = debate.finish(Timestamp::now())?;
        self.debates.update(&debate).await?;

        tracing::info!(
            debate_id = %debate.id(),
            user_id = %debate.user_id(),
            duration_secs = duration,
            "Debate finished"
        );

        if !debate.kind().is_test() {
            self.relay.release(debate.id()).await;
            return Ok(FinishDebateResult {
                debate,
                notice: None,
            });
        }

        let notice = Message::from_chatbot(debate.id(), script::EVALUATION_PENDING);
        self.messages.save(&notice).await?;

        Ok(FinishDebateResult {
            debate,
            notice: Some(notice),
        })
    }
}
