//! Notes → flashcards.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use philologic_common::Flashcard;
use philologic_flashcards::{render_all, SynthesisError};
use serde::Deserialize;

use crate::generator::GenerateError;
use crate::handlers::index::IndexView;
use crate::session;
use crate::state::SharedState;
use crate::ui::ToastKind;

#[derive(Debug, Deserialize)]
pub struct NotesForm {
    #[serde(default)]
    pub notes: String,
}

/// POST /flashcards
pub async fn generate_flashcards(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<NotesForm>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);

    let outcome = match state.generator.generate(&form.notes).await {
        Ok(batch) => Ok(state.append_flashcards(sid, batch).await),
        Err(e) => Err(e),
    };

    let mut view = IndexView::load(&state, sid).await;
    let status = match outcome {
        Ok(added) => {
            tracing::info!(session = %sid, added, "flashcards generated");
            view.toast("Flashcards generated successfully!", ToastKind::Success);
            StatusCode::OK
        }
        Err(GenerateError::Synthesis(SynthesisError::EmptyNotes)) => {
            view.toast("Please enter some study notes", ToastKind::Error);
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(GenerateError::Backend(e)) => {
            tracing::error!(session = %sid, "Flashcard generation error: {}", e);
            view.notes = form.notes;
            view.notes_error = Some("Failed to generate flashcards. Please try again.".to_string());
            StatusCode::BAD_GATEWAY
        }
    };
    (status, jar, Html(view.render()))
}

/// GET /flashcards: just the rendered cards, for embedding.
pub async fn flashcards_fragment(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Html<String> {
    let cards = match session::current(&jar) {
        Some(sid) => state.flashcards(sid).await,
        None => Vec::new(),
    };
    Html(render_all(&cards))
}

/// GET /api/flashcards
pub async fn api_flashcards(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Json<Vec<Flashcard>> {
    match session::current(&jar) {
        Some(sid) => Json(state.flashcards(sid).await),
        None => Json(Vec::new()),
    }
}
