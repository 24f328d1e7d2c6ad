//! Shared fixtures for handler tests: in-memory adapters and a scripted chatbot.

use std::sync::Arc;

use crate::adapters::chatbot::ScriptedChatbot;
use crate::adapters::memory::{
    InMemoryChatSessionRegistry, InMemoryDebateRepository, InMemoryMessageRepository,
    InMemoryReportRepository, InMemoryTopicRepository, InMemoryUserRepository,
};
use crate::application::handlers::debate::ChatRelay;
use crate::domain::foundation::{AuthenticatedUser, Role, UserId};
use crate::domain::topic::{Category, Topic};
use crate::domain::user::Level;
use crate::ports::{
    DebateRepository, MessageRepository, ReportRepository, TopicRepository, UserRepository,
};

pub struct TestWorld {
    pub users: InMemoryUserRepository,
    pub topics: InMemoryTopicRepository,
    pub debates: InMemoryDebateRepository,
    pub messages: InMemoryMessageRepository,
    pub reports: InMemoryReportRepository,
    pub sessions: InMemoryChatSessionRegistry,
    pub chatbot: ScriptedChatbot,
}

impl TestWorld {
    pub fn new() -> Self {
        let users = InMemoryUserRepository::new();
        Self {
            debates: InMemoryDebateRepository::new().with_users(users.clone()),
            users,
            topics: InMemoryTopicRepository::new(),
            messages: InMemoryMessageRepository::new(),
            reports: InMemoryReportRepository::new(),
            sessions: InMemoryChatSessionRegistry::new(),
            chatbot: ScriptedChatbot::new(),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        Arc::new(self.users.clone())
    }

    pub fn topic_repo(&self) -> Arc<dyn TopicRepository> {
        Arc::new(self.topics.clone())
    }

    pub fn debate_repo(&self) -> Arc<dyn DebateRepository> {
        Arc::new(self.debates.clone())
    }

    pub fn message_repo(&self) -> Arc<dyn MessageRepository> {
        Arc::new(self.messages.clone())
    }

    pub fn report_repo(&self) -> Arc<dyn ReportRepository> {
        Arc::new(self.reports.clone())
    }

    pub fn relay(&self) -> Arc<ChatRelay> {
        Arc::new(ChatRelay::new(
            Arc::new(self.chatbot.clone()),
            Arc::new(self.sessions.clone()),
        ))
    }

    /// Registers a user holding `score` points.
    pub async fn user_with_score(&self, id: &str, score: u32) -> AuthenticatedUser {
        self.registered(id, Role::User, score).await
    }

    pub async fn user(&self, id: &str) -> AuthenticatedUser {
        self.registered(id, Role::User, 0).await
    }

    pub async fn admin(&self, id: &str) -> AuthenticatedUser {
        self.registered(id, Role::Admin, 0).await
    }

    async fn registered(&self, id: &str, role: Role, score: u32) -> AuthenticatedUser {
        let user = AuthenticatedUser::new(
            UserId::new(id).unwrap(),
            format!("{}@example.com", id),
            None,
            role,
        );
        self.users.ensure_registered(&user).await.unwrap();
        if score > 0 {
            self.users.add_points(&user.id, score).await.unwrap();
        }
        user
    }

    pub async fn topic(&self, title: &str, difficulty: Level) -> Topic {
        let topic = Topic::new(title, Category::Philosophy, difficulty).unwrap();
        self.topics.save(&topic).await.unwrap();
        topic
    }

    pub async fn score_of(&self, user: &AuthenticatedUser) -> u32 {
        self.users
            .find_by_id(&user.id)
            .await
            .unwrap()
            .map(|p| p.score())
            .unwrap_or_default()
    }
}
