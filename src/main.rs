//! Debate Arena server binary.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use debate_arena::adapters::auth::{JwtConfig, JwtSessionValidator};
use debate_arena::adapters::chatbot::{ChatbotClientConfig, HttpChatbotGateway};
use debate_arena::adapters::memory::InMemoryChatSessionRegistry;
use debate_arena::adapters::postgres::{
    PostgresDebateRepository, PostgresMessageRepository, PostgresReportRepository,
    PostgresTopicRepository, PostgresUserRepository,
};
use debate_arena::adapters::{api_router, AppState};
use debate_arena::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let AppConfig {
        server,
        database,
        auth,
        chatbot,
    } = config;

    let pool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let gateway = HttpChatbotGateway::new(
        ChatbotClientConfig::new(chatbot.base_url.clone())
            .with_connect_timeout(chatbot.connect_timeout())
            .with_timeout(chatbot.timeout()),
    )?;

    let validator = JwtSessionValidator::new(
        JwtConfig::new(auth.jwt_secret)
            .with_issuer(auth.issuer)
            .with_audience(auth.audience),
    );

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        topics: Arc::new(PostgresTopicRepository::new(pool.clone())),
        debates: Arc::new(PostgresDebateRepository::new(pool.clone())),
        messages: Arc::new(PostgresMessageRepository::new(pool.clone())),
        reports: Arc::new(PostgresReportRepository::new(pool)),
        chatbot: Arc::new(gateway),
        sessions: Arc::new(InMemoryChatSessionRegistry::new()),
        validator: Arc::new(validator),
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server))
        .layer(TraceLayer::new_for_http());

    let addr = server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, chatbot = %chatbot.base_url, "debate arena listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
