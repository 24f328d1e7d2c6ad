//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! `api_router` wires them together behind authentication.

pub mod debate;
pub mod error;
pub mod health;
pub mod middleware;
pub mod report;
pub mod topic;
pub mod user;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, Router};

use crate::adapters::memory::{
    InMemoryChatSessionRegistry, InMemoryDebateRepository, InMemoryMessageRepository,
    InMemoryReportRepository, InMemoryTopicRepository, InMemoryUserRepository,
};
use crate::application::handlers::{
    CancelDebateHandler, ChatRelay, ChatbotStatusHandler, CreateReportHandler,
    CreateTopicHandler, DebateHistoryHandler, DeleteTopicHandler, EvaluateTestHandler,
    FinishDebateHandler, GetDebateHandler, GetMeHandler, GetMessagesHandler, GetReportHandler,
    ListDebatesHandler, ListReportsHandler, ListTopicsHandler, MyReportsHandler,
    ProbeChatbotHandler, ProcessReportHandler, SendMessageHandler, StartDebateHandler,
    UpdateTopicHandler, UserStatsHandler,
};
use crate::ports::{
    ChatSessionRegistry, ChatbotGateway, DebateRepository, MessageRepository, ReportRepository,
    SessionValidator, TopicRepository, UserRepository,
};

pub use error::ErrorResponse;

use debate::{admin_chatbot_routes, chatbot_routes, debate_routes, DebateHandlers};
use health::health_routes;
use middleware::{auth_middleware, provision_middleware};
use report::{admin_report_routes, report_routes, ReportHandlers};
use topic::{admin_topic_routes, topic_routes, TopicHandlers};
use user::me_routes;

/// Every port the API needs.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub topics: Arc<dyn TopicRepository>,
    pub debates: Arc<dyn DebateRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub chatbot: Arc<dyn ChatbotGateway>,
    pub sessions: Arc<dyn ChatSessionRegistry>,
    pub validator: Arc<dyn SessionValidator>,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory(
        chatbot: Arc<dyn ChatbotGateway>,
        validator: Arc<dyn SessionValidator>,
    ) -> Self {
        let users = InMemoryUserRepository::new();
        Self {
            debates: Arc::new(InMemoryDebateRepository::new().with_users(users.clone())),
            users: Arc::new(users),
            topics: Arc::new(InMemoryTopicRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
            reports: Arc::new(InMemoryReportRepository::new()),
            chatbot,
            sessions: Arc::new(InMemoryChatSessionRegistry::new()),
            validator,
        }
    }

    fn debate_handlers(&self) -> DebateHandlers {
        let relay = Arc::new(ChatRelay::new(self.chatbot.clone(), self.sessions.clone()));
        DebateHandlers {
            start: Arc::new(StartDebateHandler::new(
                self.users.clone(),
                self.topics.clone(),
                self.debates.clone(),
                self.messages.clone(),
            )),
            send_message: Arc::new(SendMessageHandler::new(
                self.topics.clone(),
                self.debates.clone(),
                self.messages.clone(),
                relay.clone(),
            )),
            finish: Arc::new(FinishDebateHandler::new(
                self.debates.clone(),
                self.messages.clone(),
                relay.clone(),
            )),
            evaluate: Arc::new(EvaluateTestHandler::new(
                self.debates.clone(),
                self.messages.clone(),
                relay.clone(),
            )),
            cancel: Arc::new(CancelDebateHandler::new(
                self.debates.clone(),
                self.messages.clone(),
                relay.clone(),
            )),
            get: Arc::new(GetDebateHandler::new(self.debates.clone())),
            list: Arc::new(ListDebatesHandler::new(self.debates.clone())),
            messages: Arc::new(GetMessagesHandler::new(
                self.debates.clone(),
                self.messages.clone(),
            )),
            stats: Arc::new(UserStatsHandler::new(
                self.users.clone(),
                self.debates.clone(),
            )),
            history: Arc::new(DebateHistoryHandler::new(
                self.topics.clone(),
                self.debates.clone(),
            )),
            chatbot_status: Arc::new(ChatbotStatusHandler::new(relay)),
            probe: Arc::new(ProbeChatbotHandler::new(self.chatbot.clone())),
        }
    }

    fn topic_handlers(&self) -> TopicHandlers {
        TopicHandlers {
            list: Arc::new(ListTopicsHandler::new(
                self.users.clone(),
                self.topics.clone(),
            )),
            create: Arc::new(CreateTopicHandler::new(self.topics.clone())),
            update: Arc::new(UpdateTopicHandler::new(self.topics.clone())),
            delete: Arc::new(DeleteTopicHandler::new(
                self.topics.clone(),
                self.debates.clone(),
            )),
        }
    }

    fn report_handlers(&self) -> ReportHandlers {
        ReportHandlers {
            create: Arc::new(CreateReportHandler::new(
                self.reports.clone(),
                self.debates.clone(),
            )),
            mine: Arc::new(MyReportsHandler::new(self.reports.clone())),
            get: Arc::new(GetReportHandler::new(self.reports.clone())),
            list: Arc::new(ListReportsHandler::new(self.reports.clone())),
            process: Arc::new(ProcessReportHandler::new(self.reports.clone())),
        }
    }
}

/// The complete `/api` surface.
///
/// Everything but `/api/health` goes through `auth_middleware` and then
/// first-seen provisioning.
pub fn api_router(state: AppState) -> Router {
    let debates = state.debate_handlers();
    let topics = state.topic_handlers();
    let reports = state.report_handlers();
    let me = Arc::new(GetMeHandler::new(state.users.clone()));

    let protected = Router::new()
        .nest("/me", me_routes(me))
        .nest("/topics", topic_routes(topics.clone()))
        .nest("/debates", debate_routes(debates.clone()))
        .nest("/chatbot", chatbot_routes(debates.clone()))
        .nest("/reports", report_routes(reports.clone()))
        .nest("/admin/topics", admin_topic_routes(topics))
        .nest("/admin/reports", admin_report_routes(reports))
        .nest("/admin/chatbot", admin_chatbot_routes(debates))
        .layer(from_fn_with_state(state.users.clone(), provision_middleware))
        .layer(from_fn_with_state(state.validator.clone(), auth_middleware));

    Router::new()
        .nest("/api", protected)
        .nest("/api/health", health_routes())
}
