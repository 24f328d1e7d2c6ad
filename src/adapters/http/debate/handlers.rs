//! HTTP handlers for debate and chatbot endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, invalid_id, json_rejection, query_rejection};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::debate::{
    CancelDebateCommand, CancelDebateHandler, ChatbotStatusHandler, DebateHistoryHandler,
    DebateHistoryQuery, EvaluateTestCommand, EvaluateTestHandler, FinishDebateCommand,
    FinishDebateHandler, GetDebateHandler, GetDebateQuery, GetMessagesHandler, GetMessagesQuery,
    ListDebatesHandler, ListDebatesQuery, ProbeChatbotCommand, ProbeChatbotHandler,
    SendMessageCommand, SendMessageHandler, StartDebateCommand, StartDebateHandler,
    UserStatsHandler, UserStatsQuery,
};
use crate::domain::debate::DebateError;
use crate::domain::foundation::DebateId;

use super::dto::{
    ChatbotStatusResponse, DebateRecapResponse, DebateResponse, EvaluationResponse,
    FinishDebateResponse, HistoryParams, ListDebatesParams, MessageResponse,
    ProbeChatbotRequest, ProbeChatbotResponse, SendMessageRequest, SendMessageResponse,
    StartDebateRequest, StartDebateResponse, StatsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DebateHandlers {
    pub start: Arc<StartDebateHandler>,
    pub send_message: Arc<SendMessageHandler>,
    pub finish: Arc<FinishDebateHandler>,
    pub evaluate: Arc<EvaluateTestHandler>,
    pub cancel: Arc<CancelDebateHandler>,
    pub get: Arc<GetDebateHandler>,
    pub list: Arc<ListDebatesHandler>,
    pub messages: Arc<GetMessagesHandler>,
    pub stats: Arc<UserStatsHandler>,
    pub history: Arc<DebateHistoryHandler>,
    pub chatbot_status: Arc<ChatbotStatusHandler>,
    pub probe: Arc<ProbeChatbotHandler>,
}

fn parse_debate_id(raw: &str) -> Result<DebateId, Response> {
    raw.parse::<DebateId>().map_err(|_| invalid_id("debate"))
}

// ════════════════════════════════════════════════════════════════════════════
// Debate lifecycle
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/debates - Start a debate
pub async fn start_debate(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<StartDebateRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = StartDebateCommand {
        user_id: user.id,
        topic_id: req.topic_id,
        stance: req.stance,
        kind: req.kind,
    };

    match handlers.start.handle(cmd).await {
        Ok(result) => {
            let response = StartDebateResponse {
                debate: DebateResponse::from(&result.debate),
                topic_title: result.topic.title().to_string(),
                introduction: MessageResponse::from(&result.introduction),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// POST /api/debates/:id/messages - Send a message to the chatbot
pub async fn send_message(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = SendMessageCommand {
        user_id: user.id,
        debate_id,
        content: req.content,
    };

    match handlers.send_message.handle(cmd).await {
        Ok(result) => {
            let response = SendMessageResponse {
                message: MessageResponse::from(&result.message),
                reply: MessageResponse::from(&result.reply),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// POST /api/debates/:id/finish - Finish a debate
pub async fn finish_debate(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = FinishDebateCommand {
        user_id: user.id,
        debate_id,
    };

    match handlers.finish.handle(cmd).await {
        Ok(result) => {
            let response = FinishDebateResponse {
                debate: DebateResponse::from(&result.debate),
                notice: result.notice.as_ref().map(MessageResponse::from),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// POST /api/debates/:id/evaluation - Grade a test debate
pub async fn evaluate_test(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EvaluateTestCommand {
        user_id: user.id,
        debate_id,
    };

    match handlers.evaluate.handle(cmd).await {
        Ok(result) => {
            let response = EvaluationResponse {
                debate: DebateResponse::from(&result.debate),
                evaluation: MessageResponse::from(&result.evaluation),
                grade: result.grade,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// DELETE /api/debates/:id - Cancel a running debate
pub async fn cancel_debate(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CancelDebateCommand {
        user_id: user.id,
        debate_id,
    };

    match handlers.cancel.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_debate_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Queries
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/debates/:id - Get one debate
pub async fn get_debate(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetDebateQuery {
        user_id: user.id,
        debate_id,
    };

    match handlers.get.handle(query).await {
        Ok(debate) => (StatusCode::OK, Json(DebateResponse::from(&debate))).into_response(),
        Err(e) => handle_debate_error(e),
    }
}

/// GET /api/debates?status= - List the caller's debates
pub async fn list_debates(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListDebatesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListDebatesQuery {
        user_id: user.id,
        filter: params.status,
    };

    match handlers.list.handle(query).await {
        Ok(debates) => {
            let response: Vec<DebateResponse> = debates.iter().map(DebateResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// GET /api/debates/:id/messages - Debate transcript
pub async fn get_messages(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    Path(debate_id): Path<String>,
) -> Response {
    let debate_id = match parse_debate_id(&debate_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetMessagesQuery {
        user_id: user.id,
        debate_id,
    };

    match handlers.messages.handle(query).await {
        Ok(messages) => {
            let response: Vec<MessageResponse> =
                messages.iter().map(MessageResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

/// GET /api/debates/stats - Caller's statistics
pub async fn get_stats(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.stats.handle(UserStatsQuery { user_id: user.id }).await {
        Ok(stats) => (StatusCode::OK, Json(StatsResponse::from(stats))).into_response(),
        Err(e) => handle_debate_error(e),
    }
}

/// GET /api/debates/history?limit= - Recent debates with topic details
pub async fn get_history(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = DebateHistoryQuery {
        user_id: user.id,
        limit: params.limit,
    };

    match handlers.history.handle(query).await {
        Ok(recaps) => {
            let response: Vec<DebateRecapResponse> =
                recaps.into_iter().map(DebateRecapResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Chatbot
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/chatbot/status - Chatbot health and live sessions
pub async fn chatbot_status(
    State(handlers): State<DebateHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    let status = handlers.chatbot_status.handle().await;
    (StatusCode::OK, Json(ChatbotStatusResponse::from(status))).into_response()
}

/// POST /api/admin/chatbot/test - Send a one-off message (admin)
pub async fn probe_chatbot(
    State(handlers): State<DebateHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<ProbeChatbotRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = ProbeChatbotCommand {
        user,
        message: req.message,
    };

    match handlers.probe.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ProbeChatbotResponse { result })).into_response(),
        Err(e) => handle_debate_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_debate_error(error: DebateError) -> Response {
    error_response(error.code(), error.to_string())
}
