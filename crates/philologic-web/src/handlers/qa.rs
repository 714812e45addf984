//! Question answering over a pasted context passage.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};
use axum_extra::extract::CookieJar;
use philologic_llm::AnswerRequest;
use serde::Deserialize;

use crate::handlers::index::IndexView;
use crate::session;
use crate::state::SharedState;
use crate::ui::ToastKind;

pub const ANSWER_FAILED: &str = "An error occurred while processing your question.";

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub question: String,
}

/// POST /ask
pub async fn ask_question(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<AskForm>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;

    let context = form.context.trim();
    let question = form.question.trim();
    view.context = context.to_string();
    view.question = question.to_string();

    if context.is_empty() || question.is_empty() {
        view.toast("Please provide both context and question", ToastKind::Error);
        return (StatusCode::UNPROCESSABLE_ENTITY, jar, Html(view.render()));
    }

    let status = match state.answers.answer(AnswerRequest::new(context, question)).await {
        Ok(answer) => {
            view.answer = Some(answer);
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!(backend = state.answers.name(), "QA error: {}", e);
            view.answer = Some(ANSWER_FAILED.to_string());
            StatusCode::BAD_GATEWAY
        }
    };
    (status, jar, Html(view.render()))
}
