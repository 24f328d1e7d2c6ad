//! HTTP adapter for the caller's own profile.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::user::{GetMeHandler, ProfileView};
use crate::domain::foundation::Role;
use crate::domain::user::Level;

#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
    pub score: u32,
    pub level: Level,
    pub points_to_next_level: Option<u32>,
    pub registered_at: String,
}

impl From<ProfileView> for MeResponse {
    fn from(view: ProfileView) -> Self {
        let profile = view.profile;
        Self {
            id: profile.id().to_string(),
            email: profile.email().to_string(),
            display_name: profile.display_name().map(str::to_string),
            role: profile.role(),
            score: profile.score(),
            level: view.level,
            points_to_next_level: view.points_to_next,
            registered_at: profile.registered_at().as_datetime().to_rfc3339(),
        }
    }
}

/// GET /api/me - Profile, level and progress
pub async fn get_me(
    State(handler): State<Arc<GetMeHandler>>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handler.handle(&user).await {
        Ok(view) => (StatusCode::OK, Json(MeResponse::from(view))).into_response(),
        Err(e) => error_response(e.code, e.message),
    }
}

/// Routes mounted at `/api/me`.
pub fn me_routes(handler: Arc<GetMeHandler>) -> Router {
    Router::new().route("/", get(get_me)).with_state(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use crate::domain::user::UserProfile;

    #[test]
    fn me_response_flattens_profile() {
        let user = AuthenticatedUser::new(
            UserId::new("u-1").unwrap(),
            "u@example.com",
            Some("Ursula".into()),
            Role::Admin,
        );
        let view = ProfileView {
            profile: UserProfile::register(&user),
            level: Level::Beginner,
            points_to_next: Some(100),
        };

        let json = serde_json::to_value(MeResponse::from(view)).unwrap();

        assert_eq!(json["role"], "ADMIN");
        assert_eq!(json["level"], "BEGINNER");
        assert_eq!(json["points_to_next_level"], 100);
        assert_eq!(json["display_name"], "Ursula");
    }
}
