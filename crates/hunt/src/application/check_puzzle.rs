//! Check Puzzle Use Case
//!
//! Read-only view of a session's puzzle state and the wishlist gate.

use crate::application::config::HuntConfig;
use crate::application::session_token;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::PuzzleState;
use crate::error::{HuntError, HuntResult};
use std::sync::Arc;

/// Check Puzzle Use Case
pub struct CheckPuzzleUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<HuntConfig>,
}

impl<S> CheckPuzzleUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<HuntConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Current puzzle state; no or invalid session reads as unsolved
    pub async fn state(&self, token: Option<&str>) -> HuntResult<PuzzleState> {
        let Some(session_id) =
            token.and_then(|t| session_token::verify(t, &self.config.session_secret))
        else {
            return Ok(PuzzleState::new());
        };

        Ok(self
            .session_repo
            .get(session_id)
            .await?
            .map(|session| session.state)
            .unwrap_or_default())
    }

    /// The wishlist, revealed only once the session solved its route
    pub async fn wishlist(&self, token: Option<&str>) -> HuntResult<Vec<String>> {
        let state = self.state(token).await?;
        if !state.solved {
            return Err(HuntError::WishlistLocked);
        }
        Ok(self.config.wishlist.clone())
    }
}
