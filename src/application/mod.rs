//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change state; query handlers only read.

pub mod handlers;

pub use handlers::{
    // Debate handlers
    CancelDebateCommand, CancelDebateHandler, ChatRelay, ChatbotStatus, ChatbotStatusHandler,
    DebateHistoryHandler, DebateHistoryQuery, DebateRecap, EvaluateTestCommand,
    EvaluateTestHandler, EvaluateTestResult, FinishDebateCommand, FinishDebateHandler,
    FinishDebateResult, GetDebateHandler, GetDebateQuery, GetMessagesHandler, GetMessagesQuery,
    ListDebatesHandler, ListDebatesQuery, ProbeChatbotCommand, ProbeChatbotHandler,
    SendMessageCommand, SendMessageHandler, SendMessageResult, StartDebateCommand,
    StartDebateHandler, StartDebateResult, UserStats, UserStatsHandler, UserStatsQuery,
    // Topic handlers
    CreateTopicCommand, CreateTopicHandler, DeleteTopicCommand, DeleteTopicHandler,
    ListTopicsHandler, ListTopicsQuery, TopicView, UpdateTopicCommand, UpdateTopicHandler,
    // Report handlers
    CreateReportCommand, CreateReportHandler, GetReportHandler, GetReportQuery,
    ListReportsHandler, ListReportsQuery, MyReportsHandler, MyReportsQuery,
    ProcessReportCommand, ProcessReportHandler,
    // User handlers
    GetMeHandler, ProfileView,
};
