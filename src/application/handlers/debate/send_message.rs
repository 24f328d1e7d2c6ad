//! SendMessageHandler - Stores a participant turn and the chatbot's answer.

use std::sync::Arc;

use super::{load_owned_debate, ChatRelay};
use crate::domain::debate::{DebateError, Message};
use crate::domain::foundation::{DebateId, UserId};
use crate::ports::{DebateRepository, MessageRepository, TopicRepository};

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub user_id: UserId,
    pub debate_id: DebateId,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub message: Message,
    pub reply: Message,
}

pub struct SendMessageHandler {
    topics: Arc<dyn TopicRepository>,
    debates: Arc<dyn DebateRepository>,
    messages: Arc<dyn MessageRepository>,
    relay: Arc<ChatRelay>,
}

impl SendMessageHandler {
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        debates: Arc<dyn DebateRepository>,
        messages: Arc<dyn MessageRepository>,
        relay: Arc<ChatRelay>,
    ) -> Self {
        Self {
            topics,
            debates,
            messages,
            relay,
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, DebateError> {
        // 1. Validate before touching storage
        let message = Message::from_participant(cmd.debate_id, cmd.user_id.clone(), &cmd.content)?;

        // 2. Debate must be ours and running
        let debate = load_owned_debate(self.debates.as_ref(), cmd.debate_id, &cmd.user_id).await?;
        debate.ensure_in_progress()?;

        let topic = self
            .topics
            .find_by_id(&debate.topic_id())
            .await?
            .ok_or(DebateError::TopicNotFound(debate.topic_id()))?;

        // 3. Store the participant turn
        self.messages.save(&message).await?;

        // 4. Relay and store the answer
        let reply_text = self
            .relay
            .relay(&debate, topic.title(), message.content())
            .await;
        let reply = Message::from_chatbot(debate.id(), reply_text);
        self.messages.save(&reply).await?;

        Ok(SendMessageResult { message, reply })
    }
}
