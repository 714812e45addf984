//! Registration page and form validation.
//!
//! Accounts are not stored: a valid registration redirects home with a
//! success notice, an invalid one re-renders the form with every failing rule.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use philologic_common::escape_html;
use serde::Deserialize;

use crate::handlers::index::IndexView;
use crate::session;
use crate::state::SharedState;
use crate::ui::{self, ToastKind};

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Check every rule and collect all failures, in field order.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), Vec<&'static str>> {
    let mut errors = Vec::new();
    if form.username.trim().chars().count() < MIN_USERNAME_CHARS {
        errors.push("Username too short.");
    }
    if !form.email.trim().contains('@') {
        errors.push("Invalid email.");
    }
    if form.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push("Password too short.");
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn render_register_page(username: &str, email: &str, toasts: &[String]) -> String {
    let body = format!(r#"
    <section class="card auth-card">
        <h1 class="section-title">Create your PhiloLogic account</h1>
        <form method="POST" action="/register" novalidate>
            <div class="form-group">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" value="{}" minlength="{}" required>
            </div>
            <div class="form-group">
                <label for="email">Email</label>
                <input type="email" id="email" name="email" value="{}" required>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" minlength="{}" required>
            </div>
            <button type="submit" class="btn primary">Register</button>
        </form>
    </section>"#,
        escape_html(username), MIN_USERNAME_CHARS,
        escape_html(email),
        MIN_PASSWORD_CHARS);
    ui::page("Register", &body, None, toasts)
}

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(render_register_page("", "", &[]))
}

/// POST /register
pub async fn register_submit(Form(form): Form<RegistrationForm>) -> Response {
    match validate_registration(&form) {
        Ok(()) => {
            tracing::info!(username = %form.username.trim(), "registration accepted");
            Redirect::to("/?registered=1").into_response()
        }
        Err(errors) => {
            tracing::debug!(failures = errors.len(), "registration rejected");
            let toasts = vec![ui::toast(&errors.join(" "), ToastKind::Error)];
            let html = render_register_page(form.username.trim(), form.email.trim(), &toasts);
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
        }
    }
}

/// POST /login: sign-in is not offered; the form degrades to a notice.
pub async fn login_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    view.toast("Sign-in is not available yet.", ToastKind::Info);
    (StatusCode::NOT_IMPLEMENTED, jar, Html(view.render()))
}
