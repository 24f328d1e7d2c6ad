//! Messages exchanged during a debate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, DebateId, MessageId, Timestamp, UserId, ValidationError};

/// Maximum length accepted for a participant message.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Who wrote a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "user_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Author {
    Participant(UserId),
    Chatbot,
}

impl Author {
    pub fn is_chatbot(&self) -> bool {
        matches!(self, Author::Chatbot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    debate_id: DebateId,
    author: Author,
    content: String,
    sent_at: Timestamp,
}

impl Message {
    /// A message typed by the debate's participant.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the content is blank
    /// - `TooLong` past 5000 characters
    pub fn from_participant(
        debate_id: DebateId,
        user_id: UserId,
        content: &str,
    ) -> Result<Self, ValidationError> {
        let content = require_text("content", content, MAX_MESSAGE_LENGTH)?;
        Ok(Self::build(debate_id, Author::Participant(user_id), content))
    }

    /// A message authored by the chatbot. Stored verbatim.
    pub fn from_chatbot(debate_id: DebateId, content: impl Into<String>) -> Self {
        Self::build(debate_id, Author::Chatbot, content.into())
    }

    fn build(debate_id: DebateId, author: Author, content: String) -> Self {
        Self {
            id: MessageId::new(),
            debate_id,
            author,
            content,
            sent_at: Timestamp::now(),
        }
    }

    pub fn reconstitute(
        id: MessageId,
        debate_id: DebateId,
        author: Author,
        content: String,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            id,
            debate_id,
            author,
            content,
            sent_at,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn debate_id(&self) -> DebateId {
        self.debate_id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sent_at(&self) -> Timestamp {
        self.sent_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_message_is_trimmed() {
        let m = Message::from_participant(DebateId::new(), UserId::new("u").unwrap(), "  hi ")
            .unwrap();
        assert_eq!(m.content(), "hi");
        assert!(!m.author().is_chatbot());
    }

    #[test]
    fn blank_participant_message_is_rejected() {
        let err = Message::from_participant(DebateId::new(), UserId::new("u").unwrap(), " \n ");
        assert!(matches!(err, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn chatbot_message_keeps_formatting() {
        let m = Message::from_chatbot(DebateId::new(), "**DÉBAT TEST**\n\n");
        assert_eq!(m.content(), "**DÉBAT TEST**\n\n");
        assert!(m.author().is_chatbot());
    }

    #[test]
    fn author_serializes_with_tag() {
        let json = serde_json::to_value(Author::Participant(UserId::new("u-9").unwrap())).unwrap();
        assert_eq!(json["type"], "PARTICIPANT");
        assert_eq!(json["user_id"], "u-9");
        let bot = serde_json::to_value(Author::Chatbot).unwrap();
        assert_eq!(bot["type"], "CHATBOT");
    }
}
