//! In-Memory Repository Implementation
//!
//! Sessions live for the process lifetime only; persistence is an
//! explicit non-goal. Expired entries are dropped lazily on read.

use crate::domain::entities::HuntSession;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::PuzzleState;
use crate::error::HuntResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local session store
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, HuntSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (expired entries still counted until read)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &HuntSession) -> HuntResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());

        tracing::debug!(session_id = %session.id, "Session created");
        Ok(())
    }

    async fn get(&self, session_id: Uuid) -> HuntResult<Option<HuntSession>> {
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(&session_id) {
                Some(session) if session.is_expired() => true,
                Some(session) => return Ok(Some(session.clone())),
                None => return Ok(None),
            }
        };

        if expired {
            self.sessions.write().await.remove(&session_id);
            tracing::debug!(session_id = %session_id, "Expired session dropped");
        }
        Ok(None)
    }

    async fn save_state(&self, session_id: Uuid, state: PuzzleState) -> HuntResult<()> {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.state = state;
        }
        Ok(())
    }
}
