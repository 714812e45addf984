//! Index page (philosopher grid, QA panel, notes form and flashcards)
//! plus the overlays opened from a philosopher card.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use axum_extra::extract::CookieJar;
use philologic_catalog::CatalogError;
use philologic_common::{escape_html, LearningModule, PhilosopherRecord};
use philologic_flashcards::render_all;
use serde::Deserialize;
use uuid::Uuid;

use crate::session;
use crate::state::SharedState;
use crate::ui::{self, ToastKind};

pub const CATALOG_LOADING_ERROR: &str = "Error loading philosophers.";

/// Everything the index page shows. Handlers start from [`IndexView::load`]
/// and fill in the region their flow touched.
#[derive(Debug, Default)]
pub struct IndexView {
    /// `None` when the catalog could not be loaded.
    pub philosophers: Option<Vec<PhilosopherRecord>>,
    /// Already-rendered flashcards region.
    pub flashcards_html: String,
    pub notes: String,
    pub notes_error: Option<String>,
    pub context: String,
    pub question: String,
    pub answer: Option<String>,
    pub overlay: Option<String>,
    pub toasts: Vec<String>,
}

impl IndexView {
    /// Load the catalog and the session's flashcards.
    pub async fn load(state: &SharedState, session_id: Uuid) -> Self {
        let philosophers = match state.catalog.philosophers().await {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::error!("Error loading philosophers from {}: {}", state.catalog.describe(), e);
                None
            }
        };
        let cards = state.flashcards(session_id).await;
        Self {
            philosophers,
            flashcards_html: render_all(&cards),
            ..Default::default()
        }
    }

    pub fn philosopher(&self, id: i64) -> Option<&PhilosopherRecord> {
        self.philosophers.as_ref()?.iter().find(|p| p.id == id)
    }

    pub fn toast(&mut self, message: &str, kind: ToastKind) {
        self.toasts.push(ui::toast(message, kind));
    }

    pub fn render(&self) -> String {
        ui::page("Learn to Reason", &self.body(), self.overlay.as_deref(), &self.toasts)
    }

    fn body(&self) -> String {
        let grid = match &self.philosophers {
            None => format!(r#"<p class="error-text">{}</p>"#, CATALOG_LOADING_ERROR),
            Some(list) if list.is_empty() => {
                r#"<p class="placeholder-text">No philosophers available yet.</p>"#.to_string()
            }
            Some(list) => list.iter().map(philosopher_card).collect(),
        };

        let answer = match &self.answer {
            Some(text) => format!(r#"<div id="answer" class="answer-box">{}</div>"#, escape_html(text)),
            None => String::new(),
        };

        let notes_error = match &self.notes_error {
            Some(msg) => format!(r#"<div id="notes-error" class="error-text">{}</div>"#, escape_html(msg)),
            None => String::new(),
        };

        format!(r#"
    <section class="hero">
        <h1>Learn to reason like the great philosophers</h1>
        <p class="text-muted">Study each thinker's method, ask questions about a passage, and turn your notes into flashcards.</p>
    </section>

    <section id="philosophers">
        <h2 class="section-title">Philosophers</h2>
        <div id="philosophers-grid" class="philosophers-grid">{}</div>
    </section>

    <section id="qa" class="card">
        <h2 class="section-title">Ask a Question</h2>
        <form method="POST" action="/ask" class="qa-form">
            <div class="form-group">
                <label for="context">Context</label>
                <textarea id="context" name="context" rows="4" placeholder="Paste a passage to reason about">{}</textarea>
            </div>
            <div class="form-group">
                <label for="question">Question</label>
                <input type="text" id="question" name="question" value="{}" placeholder="What would you like to know?">
            </div>
            <button type="submit" class="btn primary">Ask</button>
        </form>
        {}
    </section>

    <section id="notes" class="card">
        <h2 class="section-title">Study Notes to Flashcards</h2>
        <form id="notes-form" method="POST" action="/flashcards">
            <div class="form-group">
                <label for="notes-input">Your notes</label>
                <textarea id="notes-input" name="notes" rows="6" placeholder="Paste your study notes here">{}</textarea>
            </div>
            <button type="submit" class="btn primary">Generate Flashcards</button>
        </form>
        {}
        <div id="flashcards-container" class="flashcards-grid">{}</div>
        <form method="POST" action="/session/end" class="session-end">
            <button type="submit" class="btn secondary">End Session</button>
        </form>
    </section>"#,
            grid,
            escape_html(&self.context),
            escape_html(&self.question),
            answer,
            escape_html(&self.notes),
            notes_error,
            self.flashcards_html)
    }
}

fn philosopher_card(p: &PhilosopherRecord) -> String {
    format!(r#"
        <div class="philosopher-card">
            <h3>{}</h3>
            <h4>{}</h4>
            <p>{}</p>
            <div class="card-actions">
                <a class="btn primary" href="/philosophers/{}/start">Start Learning</a>
                <a class="btn secondary" href="/philosophers/{}/details">Details</a>
                <a class="btn secondary" href="/philosophers/{}/modules">Modules</a>
            </div>
        </div>"#,
        escape_html(&p.name),
        escape_html(&p.work_title),
        escape_html(&p.description),
        p.id, p.id, p.id)
}

pub fn details_overlay(p: &PhilosopherRecord) -> String {
    ui::modal(&format!(r#"
        <h2>{}</h2>
        <h3>{}</h3>
        <p><strong>Description:</strong> {}</p>
        <p><strong>Reasoning Framework:</strong> {}</p>
        <div class="modal-actions">
            <a class="btn primary" href="/philosophers/{}/start">Start Learning</a>
            <a class="btn secondary" href="/">Close</a>
        </div>"#,
        escape_html(&p.name),
        escape_html(&p.work_title),
        escape_html(&p.description),
        escape_html(&p.reasoning_framework),
        p.id))
}

pub fn start_overlay(p: &PhilosopherRecord) -> String {
    let name = escape_html(&p.name);
    ui::modal(&format!(r#"
        <h2>Start Learning with {}</h2>
        <p><strong>Methodology:</strong> {}</p>
        <p>This would begin an interactive learning session with {}.
        You'll learn their unique approach to logical reasoning through guided exercises.</p>
        <div class="modal-actions">
            <a class="btn primary" href="/philosophers/{}/modules">Begin Session</a>
        </div>"#,
        name,
        escape_html(&p.reasoning_framework),
        name,
        p.id))
}

pub fn modules_overlay(philosopher_id: i64, modules: &[LearningModule]) -> String {
    let items: String = if modules.is_empty() {
        r#"<li class="text-muted">No modules available yet.</li>"#.to_string()
    } else {
        modules.iter().map(|m| {
            let premium = if m.is_premium { r#" <span class="badge">Premium</span>"# } else { "" };
            format!("<li><strong>{}</strong> - {}{}</li>", escape_html(&m.title), escape_html(&m.content), premium)
        }).collect()
    };
    ui::modal(&format!(r#"
        <h2>Modules for Philosopher #{}</h2>
        <ul class="modules-list">{}</ul>
        <div class="modal-actions">
            <a class="btn secondary" href="/">Close</a>
        </div>"#, philosopher_id, items))
}

pub fn auth_overlay(kind: &str) -> Option<String> {
    let form = match kind {
        "register" => r#"
        <h2>Join PhiloLogic</h2>
        <form method="POST" action="/register">
            <div class="form-group">
                <label for="reg-username">Username</label>
                <input type="text" id="reg-username" name="username" required>
            </div>
            <div class="form-group">
                <label for="reg-email">Email</label>
                <input type="email" id="reg-email" name="email" required>
            </div>
            <div class="form-group">
                <label for="reg-password">Password</label>
                <input type="password" id="reg-password" name="password" required>
            </div>
            <button type="submit" class="btn primary">Register</button>
        </form>"#,
        "login" => r#"
        <h2>Welcome Back</h2>
        <form method="POST" action="/login">
            <div class="form-group">
                <label for="login-email">Email</label>
                <input type="email" id="login-email" name="email" required>
            </div>
            <div class="form-group">
                <label for="login-password">Password</label>
                <input type="password" id="login-password" name="password" required>
            </div>
            <button type="submit" class="btn primary">Login</button>
        </form>"#,
        _ => return None,
    };
    Some(ui::modal(form))
}

#[derive(Debug, Deserialize, Default)]
pub struct IndexQuery {
    pub registered: Option<String>,
}

/// GET /
pub async fn index(
    State(state): State<SharedState>,
    jar: CookieJar,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    if query.registered.as_deref() == Some("1") {
        view.toast("Registration successful!", ToastKind::Success);
    }
    (jar, Html(view.render()))
}

/// GET /philosophers/{id}/details
pub async fn philosopher_details(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    let status = match view.philosopher(id).map(details_overlay) {
        Some(overlay) => {
            view.overlay = Some(overlay);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    };
    (status, jar, Html(view.render()))
}

/// GET /philosophers/{id}/start
pub async fn start_learning(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    let status = match view.philosopher(id).map(start_overlay) {
        Some(overlay) => {
            view.overlay = Some(overlay);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    };
    (status, jar, Html(view.render()))
}

/// GET /philosophers/{id}/modules
pub async fn philosopher_modules(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    let status = match state.catalog.modules(id).await {
        Ok(modules) => {
            view.overlay = Some(modules_overlay(id, &modules));
            StatusCode::OK
        }
        Err(CatalogError::NotFound(_)) => {
            view.toast("Failed to load modules", ToastKind::Error);
            StatusCode::NOT_FOUND
        }
        Err(e) => {
            tracing::error!(philosopher = id, "Failed to load modules: {}", e);
            view.toast("Failed to load modules", ToastKind::Error);
            StatusCode::BAD_GATEWAY
        }
    };
    (status, jar, Html(view.render()))
}

/// GET /auth/{kind}
pub async fn auth_modal(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    let (jar, sid) = session::ensure(jar);
    let mut view = IndexView::load(&state, sid).await;
    view.overlay = auth_overlay(&kind);
    let status = if view.overlay.is_some() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    (status, jar, Html(view.render()))
}
