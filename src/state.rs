//! Application state: the shared vocabulary store and HTTP-addressed sessions.
//!
//! WebSocket connections own their controller directly and never touch the
//! session table; it only backs the `/api/v1/sessions` endpoints. Sessions
//! untouched for `session_idle` are swept before each new one is created.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::{load_quiz_config_from_env, QuizConfig};
use crate::error::ConfigError;
use crate::session::{QuizController, SessionView};
use crate::vocabulary::VocabularyStore;

/// A controller plus the last time a request touched it.
pub struct SessionSlot {
    ctl: QuizController,
    touched: Instant,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VocabularyStore>,
    pub sessions: Arc<RwLock<HashMap<String, SessionSlot>>>,
    pub max_sessions: usize,
    pub session_idle: Duration,
}

impl AppState {
    /// Build state from env: load config, then build and validate the vocabulary.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Result<Self, ConfigError> {
        let cfg = load_quiz_config_from_env()?;
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &QuizConfig) -> Result<Self, ConfigError> {
        let store = VocabularyStore::from_entries(cfg.vocabulary())?;
        info!(target: "quiz_backend", words = store.word_count(), max_sessions = cfg.max_sessions, idle_secs = cfg.session_idle_secs, "Vocabulary ready");
        Ok(Self {
            store: Arc::new(store),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: cfg.max_sessions,
            session_idle: Duration::from_secs(cfg.session_idle_secs),
        })
    }

    /// Start a new session (first word drawn). `None` when the session table is full.
    pub async fn create_session(&self) -> Option<(String, SessionView)> {
        self.create_session_at(Instant::now()).await
    }

    #[instrument(level = "debug", skip(self, now))]
    async fn create_session_at(&self, now: Instant) -> Option<(String, SessionView)> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let idle = self.session_idle;
        sessions.retain(|_, slot| now.saturating_duration_since(slot.touched) < idle);
        if sessions.len() < before {
            info!(target: "quiz", expired = before - sessions.len(), "Idle sessions discarded");
        }
        if sessions.len() >= self.max_sessions {
            warn!(target: "quiz_backend", limit = self.max_sessions, "Session limit reached");
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let ctl = QuizController::new(self.store.clone());
        let view = ctl.snapshot();
        sessions.insert(id.clone(), SessionSlot { ctl, touched: now });
        info!(target: "quiz", %id, word = %view.word, "Session created");
        Some((id, view))
    }

    /// Run `f` against the session with `id`, returning its view afterwards.
    #[instrument(level = "debug", skip(self, f), fields(%id))]
    pub async fn with_session<F>(&self, id: &str, f: F) -> Option<SessionView>
    where
        F: FnOnce(&mut QuizController),
    {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(id)?;
        slot.touched = Instant::now();
        f(&mut slot.ctl);
        Some(slot.ctl.snapshot())
    }

    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn remove_session(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(target: "quiz", %id, "Session discarded");
        }
        removed
    }
}
