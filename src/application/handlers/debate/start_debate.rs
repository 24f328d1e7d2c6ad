//! StartDebateHandler - Opens a debate and posts the chatbot's introduction.

use std::sync::Arc;

use super::level_of;
use crate::domain::debate::{script, Debate, DebateError, DebateKind, Message, Stance};
use crate::domain::foundation::{TopicId, UserId};
use crate::domain::topic::Topic;
use crate::ports::{DebateRepository, MessageRepository, TopicRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct StartDebateCommand {
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub stance: Stance,
    pub kind: DebateKind,
}

#[derive(Debug, Clone)]
pub struct StartDebateResult {
    pub debate: Debate,
    pub topic: Topic,
    pub introduction: Message,
}

pub struct StartDebateHandler {
    users: Arc<dyn UserRepository>,
    topics: Arc<dyn TopicRepository>,
    debates: Arc<dyn DebateRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl StartDebateHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        topics: Arc<dyn TopicRepository>,
        debates: Arc<dyn DebateRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            users,
            topics,
            debates,
            messages,
        }
    }

    pub async fn handle(&self, cmd: StartDebateCommand) -> Result<StartDebateResult, DebateError> {
        // 1. Topic must exist
        let topic = self
            .topics
            .find_by_id(&cmd.topic_id)
            .await?
            .ok_or(DebateError::TopicNotFound(cmd.topic_id))?;

        // 2. Level gate
        let level = level_of(self.users.as_ref(), &cmd.user_id).await?;
        if !topic.is_accessible_at(level) {
            return Err(DebateError::LevelTooLow {
                required: topic.difficulty(),
                current: level,
            });
        }

        // 3. One running debate per topic
        if let Some(running) = self
            .debates
            .find_in_progress(&cmd.user_id, &cmd.topic_id)
            .await?
        {
            return Err(DebateError::AlreadyInProgress(running.id()));
        }

        // 4. Persist debate, then the introduction
        let debate = Debate::start(cmd.user_id, cmd.topic_id, cmd.stance, cmd.kind);
        self.debates.save(&debate).await?;

        let introduction = Message::from_chatbot(
            debate.id(),
            script::introduction(topic.title(), debate.stance(), debate.kind()),
        );
        self.messages.save(&introduction).await?;

        tracing::info!(
            debate_id = %debate.id(),
            user_id = %debate.user_id(),
            topic_id = %topic.id(),
            kind = %debate.kind(),
            "Debate started"
        );

        Ok(StartDebateResult {
            debate,
            topic,
            introduction,
        })
    }
}
