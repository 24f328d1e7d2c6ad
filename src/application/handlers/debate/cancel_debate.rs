//! CancelDebateHandler - Abandons a running debate and erases it.

use std::sync::Arc;

use super::{load_owned_debate, ChatRelay};
use crate::domain::debate::DebateError;
use crate::domain::foundation::{DebateId, UserId};
use crate::ports::{DebateRepository, MessageRepository};

#[derive(Debug, Clone)]
pub struct CancelDebateCommand {
    pub user_id: UserId,
    pub debate_id: DebateId,
}

pub struct CancelDebateHandler {
    debates: Arc<dyn DebateRepository>,
    messages: Arc<dyn MessageRepository>,
    relay: Arc<ChatRelay>,
}

impl CancelDebateHandler {
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

    pub async fn handle(&self, cmd: CancelDebateCommand) -> Result<(), DebateError> {
        let debate = load_owned_debate(self.debates.as_ref(), cmd.debate_id, &cmd.user_id).await?;
        debate.ensure_in_progress()?;

        self.relay.release(debate.id()).await;

        // Messages first: they reference the debate
        let removed = self.messages.delete_by_debate(&debate.id()).await?;
        self.debates.delete(&debate.id()).await?;

        tracing::info!(
            debate_id = %debate.id(),
            user_id = %debate.user_id(),
            messages_removed = removed,
            "Debate cancelled"
        );
        Ok(())
    }
}
