//! Health check and session lifecycle.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::session;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub catalog: String,
    pub philosophers: Option<usize>,
    pub error: Option<String>,
    pub answer_backend: String,
    pub sessions: usize,
}

/// GET /health: reports whether the catalog can be reached.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let catalog = state.catalog.describe();
    let answer_backend = state.answers.name().to_string();
    let sessions = state.session_count().await;

    match state.catalog.philosophers().await {
        Ok(list) => (StatusCode::OK, Json(Health {
            status: "ok",
            catalog,
            philosophers: Some(list.len()),
            error: None,
            answer_backend,
            sessions,
        })),
        Err(e) => {
            tracing::warn!("Health check: catalog unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health {
                status: "degraded",
                catalog,
                philosophers: None,
                error: Some(e.to_string()),
                answer_backend,
                sessions,
            }))
        }
    }
}

/// POST /session/end: forget the visitor's flashcards and cookie.
pub async fn end_session(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> impl IntoResponse {
    if let Some(sid) = session::current(&jar) {
        state.end_session(sid).await;
    }
    (session::clear(jar), Redirect::to("/"))
}
