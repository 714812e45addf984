//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    index::{index, philosopher_details, start_learning, philosopher_modules, auth_modal},
    flashcards::{generate_flashcards, flashcards_fragment, api_flashcards},
    qa::ask_question,
    register::{register_page, register_submit, login_submit},
    api::{api_philosophers, api_modules},
    system::{health, end_session},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    router_for(Arc::new(state))
}

/// Router over state that is also held elsewhere (e.g. by the session sweeper).
pub fn router_for(shared: SharedState) -> Router {
    let static_dir = shared.static_dir.clone();

    Router::new()
        // Pages
        .route("/",                          get(index))
        .route("/philosophers/{id}/details", get(philosopher_details))
        .route("/philosophers/{id}/start",   get(start_learning))
        .route("/philosophers/{id}/modules", get(philosopher_modules))
        .route("/auth/{kind}",               get(auth_modal))
        .route("/flashcards",                get(flashcards_fragment).post(generate_flashcards))
        .route("/ask",                       post(ask_question))
        .route("/register",                  get(register_page).post(register_submit))
        .route("/login",                     post(login_submit))
        .route("/session/end",               post(end_session))
        .route("/health",                    get(health))

        // API endpoints
        .route("/api/philosophers",              get(api_philosophers))
        .route("/api/philosophers/{id}/modules", get(api_modules))
        .route("/api/flashcards",                get(api_flashcards))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
