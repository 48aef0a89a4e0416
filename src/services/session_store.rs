use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    services::{
        generation_service::GenerationService, quiz_session::QuizSession,
        submission_service::SubmissionService,
    },
};

pub type SharedSession = Arc<Mutex<QuizSession>>;

/// In-memory registry of live quiz sessions.
///
/// Each session's lock is held only while an event is applied, never across a
/// collaborator call.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
    generation: Arc<GenerationService>,
    submission: Arc<SubmissionService>,
}

impl SessionStore {
    pub fn new(generation: Arc<GenerationService>, submission: Arc<SubmissionService>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            generation,
            submission,
        }
    }

    pub async fn create(&self) -> SharedSession {
        let session = QuizSession::new(self.generation.clone(), self.submission.clone());
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));

        self.sessions.write().await.insert(id, shared.clone());
        log::info!("Created quiz session {}", id);

        shared
    }

    pub async fn get(&self, id: &Uuid) -> AppResult<SharedSession> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    pub async fn remove(&self, id: &Uuid) -> AppResult<()> {
        match self.sessions.write().await.remove(id) {
            Some(_) => {
                log::info!("Removed quiz session {}", id);
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Session '{}' not found", id))),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops sessions untouched for longer than `max_idle`. Sessions waiting on
    /// the quiz service are kept.
    pub async fn evict_idle(&self, max_idle: chrono::Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.updated_at() >= cutoff || session.state().pending().is_some(),
            Err(_) => true,
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle quiz sessions", evicted);
        }
        evicted
    }
}

/// Periodically evicts sessions idle for more than `max_idle`.
pub fn spawn_idle_sweep(store: Arc<SessionStore>, max_idle: chrono::Duration) -> JoinHandle<()> {
    let period = max_idle
        .to_std()
        .map(|idle| (idle / 4).max(Duration::from_secs(1)))
        .unwrap_or(Duration::from_secs(60));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            store.evict_idle(max_idle).await;
        }
    })
}
