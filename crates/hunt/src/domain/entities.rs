//! Domain Entities
//!
//! Core business entities for the hunt domain.

use crate::domain::value_objects::{PuzzleState, RouteName};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Route entity - one fixed treasure-hunt path
///
/// The expected sequence is configuration data: set once at startup,
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: RouteName,
    pub expected_sequence: Vec<i64>,
}

impl Route {
    pub fn new(name: RouteName, expected_sequence: Vec<i64>) -> Self {
        Self {
            name,
            expected_sequence,
        }
    }

    /// Number of input fields, one per post along the route
    pub fn field_count(&self) -> usize {
        self.expected_sequence.len()
    }

    /// Filename of the route sheet on the map host, and the filename
    /// the download is re-served under
    pub fn sheet_file(&self) -> String {
        format!("{}.pdf", self.name)
    }
}

/// HuntSession entity - one browser session's puzzle state
#[derive(Debug, Clone)]
pub struct HuntSession {
    pub id: Uuid,
    pub state: PuzzleState,
    pub created_at: DateTime<Utc>,
    pub expires_at_ms: i64,
}

impl HuntSession {
    /// Create a fresh unsolved session
    pub fn new(ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: PuzzleState::new(),
            created_at: now,
            expires_at_ms: now.timestamp_millis() + ttl_ms,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
