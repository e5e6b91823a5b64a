//! Per-user session registry. Every session id owns an isolated `SessionStore`;
//! stores are never shared between ids.
//!
//! A session ends on an explicit DELETE or once it has been idle longer than
//! the configured TTL. Expired sessions are dropped lazily on access and by a
//! periodic sweep (`spawn_idle_sweeper`).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::store::SessionStore;

struct SessionEntry {
    store: Arc<Mutex<SessionStore>>,
    last_active: Instant,
}

impl SessionEntry {
    /// Idle past the TTL and not in the middle of an operation.
    fn is_expired(&self, now: Instant, idle_ttl: Duration) -> bool {
        now.duration_since(self.last_active) > idle_ttl && self.store.try_lock().is_ok()
    }
}

#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Registers a fresh, empty session and returns its id.
    /// Expired sessions are swept first so abandoned ones cannot pile up.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_ttl));
        sessions.insert(
            id,
            SessionEntry {
                store: Arc::new(Mutex::new(SessionStore::new())),
                last_active: now,
            },
        );
        id
    }

    /// Takes exclusive access to a session for one operation and marks it active.
    ///
    /// Only one operation may be in flight per session: if another request
    /// holds the lock this fails with `SessionBusy` instead of queueing.
    pub async fn acquire(&self, id: Uuid) -> Result<OwnedMutexGuard<SessionStore>, AppError> {
        let not_found = || AppError::NotFound(format!("Interview session {id} not found"));
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        let entry = sessions.get_mut(&id).ok_or_else(not_found)?;
        if entry.is_expired(now, self.idle_ttl) {
            sessions.remove(&id);
            debug!(session_id = %id, "Expired interview session dropped on access");
            return Err(not_found());
        }

        entry.last_active = now;
        entry
            .store
            .clone()
            .try_lock_owned()
            .map_err(|_| AppError::SessionBusy)
    }

    /// Destroys a session. Returns false if the id was unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops every idle session past the TTL; returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_ttl));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Runs `evict_idle` every `period` for the lifetime of the process.
pub fn spawn_idle_sweeper(registry: SessionRegistry, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let evicted = registry.evict_idle().await;
            if evicted > 0 {
                info!(evicted, "Evicted idle interview sessions");
            }
        }
    });
}
