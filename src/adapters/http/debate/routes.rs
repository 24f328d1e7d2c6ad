//! HTTP routes for debate and chatbot endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cancel_debate, chatbot_status, evaluate_test, finish_debate, get_debate, get_history,
    get_messages, get_stats, list_debates, probe_chatbot, send_message, start_debate,
    DebateHandlers,
};

/// Routes mounted at `/api/debates`.
pub fn debate_routes(handlers: DebateHandlers) -> Router {
    Router::new()
        .route("/", post(start_debate).get(list_debates))
        .route("/stats", get(get_stats))
        .route("/history", get(get_history))
        .route("/:id", get(get_debate).delete(cancel_debate))
        .route("/:id/messages", get(get_messages).post(send_message))
        .route("/:id/finish", post(finish_debate))
        .route("/:id/evaluation", post(evaluate_test))
        .with_state(handlers)
}

/// Routes mounted at `/api/chatbot`.
pub fn chatbot_routes(handlers: DebateHandlers) -> Router {
    Router::new()
        .route("/status", get(chatbot_status))
        .with_state(handlers)
}

/// Routes mounted at `/api/admin/chatbot`.
pub fn admin_chatbot_routes(handlers: DebateHandlers) -> Router {
    Router::new()
        .route("/test", post(probe_chatbot))
        .with_state(handlers)
}
