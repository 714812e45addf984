//! Shared application state for the web server.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use philologic_catalog::{BuiltinCatalog, CatalogSource, RemoteCatalog};
use philologic_common::Flashcard;
use philologic_flashcards::FlashcardStore;
use philologic_llm::{AnswerBackend, HttpAnswerBackend, MockAnswerBackend};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::{CatalogKind, Config, GenerationKind};
use crate::generator::FlashcardGenerator;

pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;

/// Per-visitor state. Created by the first flashcard batch and dropped on
/// `POST /session/end` or after the idle timeout.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub flashcards: FlashcardStore,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self { id, started_at: now, last_seen: now, flashcards: FlashcardStore::new() }
    }

    pub fn is_idle(&self, now: DateTime<Utc>, idle: TimeDelta) -> bool {
        now - self.last_seen > idle
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub answers: Arc<dyn AnswerBackend>,
    pub generator: FlashcardGenerator,
    pub static_dir: String,
    session_idle: TimeDelta,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        answers: Arc<dyn AnswerBackend>,
        generator: FlashcardGenerator,
    ) -> Self {
        Self {
            catalog,
            answers,
            generator,
            static_dir: "static".to_string(),
            session_idle: TimeDelta::minutes(DEFAULT_SESSION_IDLE_MINUTES),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_session_idle(mut self, idle: TimeDelta) -> Self {
        self.session_idle = idle;
        self
    }

    /// Wire collaborators from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog: Arc<dyn CatalogSource> = match config.catalog.source {
            CatalogKind::Builtin => Arc::new(BuiltinCatalog::new()),
            CatalogKind::Remote => {
                let base_url = config.catalog.base_url.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("catalog.base_url is required for a remote catalog")
                })?;
                Arc::new(RemoteCatalog::new(base_url)?)
            }
        };

        let answers: Arc<dyn AnswerBackend> = match (config.generation.backend, &config.generation.http) {
            (GenerationKind::Http, Some(http)) => Arc::new(HttpAnswerBackend::new(
                http.base_url.clone(),
                http.model.clone(),
                Some(http.api_key.clone()),
            )?),
            (GenerationKind::Http, None) => {
                tracing::warn!("generation.backend = \"http\" but no [generation.http] section; using mock answers");
                Arc::new(MockAnswerBackend::new(Duration::from_millis(config.generation.mock_delay_ms)))
            }
            (GenerationKind::Mock, _) => {
                Arc::new(MockAnswerBackend::new(Duration::from_millis(config.generation.mock_delay_ms)))
            }
        };

        let generator = FlashcardGenerator::new(
            Duration::from_millis(config.generation.flashcard_delay_ms),
            config.generation.answer_flashcards.then(|| answers.clone()),
        );

        Ok(Self::new(catalog, answers, generator)
            .with_static_dir(config.server.static_dir.clone())
            .with_session_idle(TimeDelta::minutes(config.server.session_idle_minutes as i64)))
    }

    /// Append a batch to the session's flashcards, creating the session if needed.
    pub async fn append_flashcards(&self, id: Uuid, batch: Vec<Flashcard>) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        Self::sweep(&mut sessions, now, self.session_idle);
        let session = sessions.entry(id).or_insert_with(|| {
            tracing::debug!(session = %id, "session started");
            Session::new(id)
        });
        session.last_seen = now;
        session.flashcards.append(batch)
    }

    /// Snapshot of the session's flashcards, in display order. Refreshes the
    /// idle timer; an already idle session reads as empty.
    pub async fn flashcards(&self, id: Uuid) -> Vec<Flashcard> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(s) if !s.is_idle(now, self.session_idle) => {
                s.last_seen = now;
                s.flashcards.as_slice().to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Drop sessions idle at `now`. Returns how many were removed.
    pub async fn evict_idle_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::sweep(&mut sessions, now, self.session_idle)
    }

    fn sweep(sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>, idle: TimeDelta) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, idle));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    /// Drop everything held for the session. Returns whether it existed.
    pub async fn end_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id);
        if let Some(session) = &removed {
            tracing::info!(
                session = %id,
                flashcards = session.flashcards.len(),
                age_secs = (Utc::now() - session.started_at).num_seconds(),
                "session ended"
            );
        }
        removed.is_some()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub type SharedState = Arc<AppState>;

/// Evict idle sessions every `every` until the runtime shuts down.
pub fn spawn_session_sweeper(state: SharedState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            state.evict_idle_at(Utc::now()).await;
        }
    })
}
