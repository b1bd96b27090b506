//! Repository Traits
//!
//! Interfaces for session storage and the upstream map host.
//! Implementations live in the infrastructure layer.

use crate::domain::entities::{HuntSession, Route};
use crate::domain::value_objects::PuzzleState;
use crate::error::HuntResult;
use uuid::Uuid;

/// Session repository trait
///
/// Expired sessions read as absent.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &HuntSession) -> HuntResult<()>;

    /// Get a live session by id
    async fn get(&self, session_id: Uuid) -> HuntResult<Option<HuntSession>>;

    /// Replace the puzzle state of an existing session
    async fn save_state(&self, session_id: Uuid, state: PuzzleState) -> HuntResult<()>;
}

/// Route sheet fetcher trait - retrieves the per-route PDF
#[trait_variant::make(SheetFetcher: Send)]
pub trait LocalSheetFetcher {
    /// Fetch the route sheet document from the map host
    async fn fetch(&self, route: &Route) -> HuntResult<Vec<u8>>;
}
