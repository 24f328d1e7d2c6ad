//! End-to-end tests for the debate API over in-memory adapters.
//!
//! Requests go through the full router: authentication, provisioning,
//! JSON extraction and error mapping.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use debate_arena::adapters::auth::MockSessionValidator;
use debate_arena::adapters::chatbot::{ScriptedChatbot, DEFAULT_REPLY, DEFAULT_SESSION};
use debate_arena::adapters::{api_router, AppState};
use debate_arena::domain::topic::{Category, Topic};
use debate_arena::domain::user::Level;
use debate_arena::ports::{ChatbotError, TopicRepository};

const ALICE: &str = "token-alice";
const BOB: &str = "token-bob";
const ROOT: &str = "token-root";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    state: AppState,
    chatbot: Arc<ScriptedChatbot>,
}

impl Harness {
    fn new() -> Self {
        let chatbot = Arc::new(ScriptedChatbot::new());
        let validator = Arc::new(
            MockSessionValidator::new()
                .with_test_user(ALICE, "alice")
                .with_test_user(BOB, "bob")
                .with_test_admin(ROOT, "root"),
        );
        let state = AppState::in_memory(chatbot.clone(), validator);
        Self { state, chatbot }
    }

    fn router(&self) -> Router {
        api_router(self.state.clone())
    }

    async fn seed_topic(&self, title: &str, difficulty: Level) -> String {
        let topic = Topic::new(title, Category::Philosophy, difficulty).unwrap();
        self.state.topics.save(&topic).await.unwrap();
        topic.id().to_string()
    }

    async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    async fn start(&self, token: &str, topic_id: &str, kind: &str) -> (StatusCode, Value) {
        self.call(
            Method::POST,
            "/api/debates",
            Some(token),
            Some(json!({ "topic_id": topic_id, "stance": "FOR", "kind": kind })),
        )
        .await
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn health_needs_no_token() {
    let harness = Harness::new();
    let response = harness
        .router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let harness = Harness::new();
    let (status, _) = harness.call(Method::GET, "/api/debates", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_unknown_token() {
    let harness = Harness::new();
    let (status, _) = harness
        .call(Method::GET, "/api/me", Some("forged"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn first_request_provisions_the_user() {
    let harness = Harness::new();
    let (status, body) = harness.call(Method::GET, "/api/me", Some(ALICE), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "BEGINNER");
    assert_eq!(body["points_to_next_level"], 100);
}

// =============================================================================
// Training debates
// =============================================================================

#[tokio::test]
async fn training_debate_full_flow() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Free will is an illusion", Level::Beginner).await;
    harness
        .chatbot
        .push_reply("Le libre arbitre existe.", Some("session-1"))
        .await;

    let (status, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["debate"]["status"], "IN_PROGRESS");
    assert_eq!(body["introduction"]["sender"], "CHATBOT");
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, body) = harness
        .call(
            Method::POST,
            &format!("/api/debates/{}/messages", debate_id),
            Some(ALICE),
            Some(json!({ "content": "Nos choix sont déterminés." })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["sender"], "USER");
    assert_eq!(body["message"]["user_id"], "alice");
    assert_eq!(body["reply"]["content"], "Le libre arbitre existe.");

    let (status, body) = harness
        .call(Method::POST, &format!("/api/debates/{}/finish", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["debate"]["status"], "FINISHED");
    assert!(body.get("notice").is_none());
    assert_eq!(harness.chatbot.cleared_sessions().await, vec!["session-1".to_string()]);

    let (status, body) = harness
        .call(Method::GET, &format!("/api/debates/{}/messages", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn chatbot_failure_still_answers_the_user() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Cities should ban cars", Level::Beginner).await;
    harness.chatbot.push_error(ChatbotError::Timeout).await;

    let (_, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, body) = harness
        .call(
            Method::POST,
            &format!("/api/debates/{}/messages", debate_id),
            Some(ALICE),
            Some(json!({ "content": "Les voitures polluent." })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"]["content"]
        .as_str()
        .unwrap()
        .starts_with("Erreur technique avec le chatbot"));
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Art needs no purpose", Level::Beginner).await;
    let (_, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, body) = harness
        .call(
            Method::POST,
            &format!("/api/debates/{}/messages", debate_id),
            Some(ALICE),
            Some(json!({ "content": "   " })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn second_debate_on_same_topic_conflicts() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Homework should be abolished", Level::Beginner).await;

    let (first, _) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let (second, _) = harness.start(ALICE, &topic_id, "TEST").await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn topic_above_level_is_forbidden() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Consciousness is computable", Level::Expert).await;

    let (status, _) = harness.start(ALICE, &topic_id, "TRAINING").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn start_accepts_type_alias() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Music education should be mandatory", Level::Beginner).await;

    let (status, body) = harness
        .call(
            Method::POST,
            "/api/debates",
            Some(ALICE),
            Some(json!({ "topic_id": topic_id, "stance": "AGAINST", "type": "TEST" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["debate"]["kind"], "TEST");
    assert_eq!(body["debate"]["stance"], "AGAINST");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let harness = Harness::new();
    let (status, _) = harness
        .call(Method::POST, "/api/debates", Some(ALICE), Some(json!({ "stance": "FOR" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn other_users_debates_are_invisible() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Space exploration is worth it", Level::Beginner).await;
    let (_, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .call(Method::GET, &format!("/api/debates/{}", debate_id), Some(BOB), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = harness
        .call(Method::GET, "/api/debates/not-a-uuid", Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cancel_removes_the_debate() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Remote work beats the office", Level::Beginner).await;
    let (_, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .call(Method::DELETE, &format!("/api/debates/{}", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = harness
        .call(Method::GET, &format!("/api/debates/{}", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Test debates and grading
// =============================================================================

#[tokio::test]
async fn test_debate_is_graded_and_scored() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Philosophy should be taught early", Level::Beginner).await;
    harness.chatbot.push_reply("Argument recevable.", Some("session-t")).await;
    harness
        .chatbot
        .push_reply("Bonne argumentation. Score final du débat : 72/100", None)
        .await;

    let (_, body) = harness.start(ALICE, &topic_id, "TEST").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    harness
        .call(
            Method::POST,
            &format!("/api/debates/{}/messages", debate_id),
            Some(ALICE),
            Some(json!({ "content": "Penser tôt aide à penser juste." })),
        )
        .await;

    let (status, body) = harness
        .call(Method::POST, &format!("/api/debates/{}/finish", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notice"]["content"], "Débat terminé. Évaluation en cours...");

    let (status, body) = harness
        .call(Method::POST, &format!("/api/debates/{}/evaluation", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grade"], 72);
    assert_eq!(body["debate"]["passed"], true);

    let requests = harness.chatbot.requests().await;
    let last = requests.last().unwrap();
    assert_eq!(last.message, "fin du débat");
    assert_eq!(last.session_id.as_deref(), Some("session-t"));
    assert!(harness
        .chatbot
        .cleared_sessions()
        .await
        .contains(&"session-t".to_string()));

    let (status, body) = harness.call(Method::GET, "/api/debates/stats", Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tests_passed"], 1);
    assert_eq!(body["best_grade"], 72);
    assert_eq!(body["score"], 72);

    let (status, body) = harness.call(Method::GET, "/api/debates/history", Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["topic_title"], "Philosophy should be taught early");
    assert_eq!(body[0]["grade"], 72);
}

#[tokio::test]
async fn evaluating_a_training_debate_is_bad_request() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Zoos should close", Level::Beginner).await;
    let (_, body) = harness.start(ALICE, &topic_id, "TRAINING").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .call(Method::POST, &format!("/api/debates/{}/evaluation", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn running_test_cannot_be_graded_then_cancelled() {
    let harness = Harness::new();
    let topic_id = harness.seed_topic("Homework should be optional", Level::Beginner).await;
    harness
        .chatbot
        .push_reply("Score final du débat : 90/100", None)
        .await;
    let (_, body) = harness.start(ALICE, &topic_id, "TEST").await;
    let debate_id = body["debate"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .call(Method::POST, &format!("/api/debates/{}/evaluation", debate_id), Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = harness
        .call(Method::DELETE, &format!("/api/debates/{}", debate_id), Some(ALICE), None)
        .await;
    assert!(status.is_success());

    let (_, body) = harness.call(Method::GET, "/api/me", Some(ALICE), None).await;
    assert_eq!(body["score"], 0);
}

#[tokio::test]
async fn list_filters_by_status() {
    let harness = Harness::new();
    let first = harness.seed_topic("Tabs beat spaces", Level::Beginner).await;
    let second = harness.seed_topic("History repeats itself", Level::Beginner).await;

    let (_, body) = harness.start(ALICE, &first, "TRAINING").await;
    let finished_id = body["debate"]["id"].as_str().unwrap().to_string();
    harness
        .call(Method::POST, &format!("/api/debates/{}/finish", finished_id), Some(ALICE), None)
        .await;
    harness.start(ALICE, &second, "TRAINING").await;

    let (status, body) = harness
        .call(Method::GET, "/api/debates?status=finished", Some(ALICE), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let debates = body.as_array().unwrap();
    assert_eq!(debates.len(), 1);
    assert_eq!(debates[0]["id"], finished_id.as_str());
}

// =============================================================================
// Chatbot status and admin probe
// =============================================================================

#[tokio::test]
async fn chatbot_status_reports_health() {
    let harness = Harness::new();
    let (status, body) = harness.call(Method::GET, "/api/chatbot/status", Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    harness.chatbot.set_healthy(false);
    let (_, body) = harness.call(Method::GET, "/api/chatbot/status", Some(ALICE), None).await;
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn probe_is_admin_only() {
    let harness = Harness::new();
    let request = json!({ "message": "Bonjour" });

    let (status, _) = harness
        .call(Method::POST, "/api/admin/chatbot/test", Some(ALICE), Some(request.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = harness
        .call(Method::POST, "/api/admin/chatbot/test", Some(ROOT), Some(request))
        .await;
    assert_eq!(status, StatusCode::OK);
    let result = body["result"].as_str().unwrap();
    assert!(result.contains(DEFAULT_SESSION));
    assert!(result.contains(DEFAULT_REPLY));
}

// =============================================================================
// Topics
// =============================================================================

#[tokio::test]
async fn topic_catalogue_marks_accessibility() {
    let harness = Harness::new();
    harness.seed_topic("Easy one", Level::Beginner).await;
    harness.seed_topic("Hard one", Level::Advanced).await;

    let (status, body) = harness.call(Method::GET, "/api/topics", Some(ALICE), None).await;
    assert_eq!(status, StatusCode::OK);
    let topics = body.as_array().unwrap();
    assert_eq!(topics.len(), 2);
    for topic in topics {
        let expected = topic["difficulty"] == "BEGINNER";
        assert_eq!(topic["accessible"], expected);
    }
}

#[tokio::test]
async fn admin_manages_topics() {
    let harness = Harness::new();
    let create = json!({ "title": "Robots deserve rights", "category": "COMPUTING", "difficulty": "INTERMEDIATE" });

    let (status, _) = harness
        .call(Method::POST, "/api/admin/topics", Some(ALICE), Some(create.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = harness
        .call(Method::POST, "/api/admin/topics", Some(ROOT), Some(create))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let topic_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = harness
        .call(
            Method::PUT,
            &format!("/api/admin/topics/{}", topic_id),
            Some(ROOT),
            Some(json!({ "difficulty": "BEGINNER" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["difficulty"], "BEGINNER");
    assert_eq!(body["title"], "Robots deserve rights");

    let (status, _) = harness.start(ALICE, &topic_id, "TRAINING").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = harness
        .call(Method::DELETE, &format!("/api/admin/topics/{}", topic_id), Some(ROOT), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
