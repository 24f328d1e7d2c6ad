//! HTTP adapter for debates and the chatbot.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatbotStatusResponse, DebateRecapResponse, DebateResponse, EvaluationResponse,
    FinishDebateResponse, MessageResponse, SendMessageResponse, StartDebateRequest,
    StartDebateResponse, StatsResponse,
};
pub use handlers::DebateHandlers;
pub use routes::{admin_chatbot_routes, chatbot_routes, debate_routes};
