//! Submit Numbers Use Case
//!
//! One explicit submit per full set of entries. The original page
//! re-validated on every keystroke once all fields were filled; the
//! API collapses that to a single request carrying the whole
//! submission.

use crate::application::config::HuntConfig;
use crate::application::session_token;
use crate::domain::entities::HuntSession;
use crate::domain::repository::SessionRepository;
use crate::domain::services::{self, Outcome};
use crate::domain::value_objects::{PuzzleState, RouteName, Submission};
use crate::error::{HuntError, HuntResult};
use std::sync::Arc;
use uuid::Uuid;

/// Input DTO for submit numbers
#[derive(Debug, Clone)]
pub struct SubmitNumbersInput {
    pub route: RouteName,
    pub entries: Vec<String>,
}

/// Output DTO for submit numbers
#[derive(Debug, Clone)]
pub struct SubmitNumbersOutput {
    pub session_id: Uuid,
    /// Signed token, present only when a session was created
    pub session_token: Option<String>,
    pub state: PuzzleState,
}

/// Submit Numbers Use Case
pub struct SubmitNumbersUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<HuntConfig>,
}

impl<S> SubmitNumbersUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<HuntConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: SubmitNumbersInput,
        session_id: Option<Uuid>,
    ) -> HuntResult<SubmitNumbersOutput> {
        let route = self
            .config
            .route(input.route)
            .ok_or(HuntError::RouteNotFound)?;

        if input.entries.len() != route.field_count() {
            return Err(HuntError::WrongEntryCount {
                expected: route.field_count(),
                actual: input.entries.len(),
            });
        }

        // Resolve the caller's session; a missing, forged or expired
        // cookie silently starts a fresh one
        let (session, token) = match self.resolve_session(session_id).await? {
            Some(session) => (session, None),
            None => {
                let session = HuntSession::new(self.config.session_ttl_ms());
                self.session_repo.create(&session).await?;
                let token = session_token::sign(&session.id, &self.config.session_secret);
                tracing::info!(session_id = %session.id, "Started hunt session");
                (session, Some(token))
            }
        };

        let submission = Submission::new(input.entries);
        let outcome = services::evaluate(route, &submission);
        let state = services::apply(session.state, outcome);

        self.session_repo.save_state(session.id, state).await?;

        match outcome {
            Outcome::Solved => tracing::info!(
                session_id = %session.id,
                route = %route.name,
                "Puzzle solved"
            ),
            Outcome::Mismatch => tracing::info!(
                session_id = %session.id,
                route = %route.name,
                "Submission did not match"
            ),
            Outcome::Incomplete => tracing::debug!(
                session_id = %session.id,
                route = %route.name,
                "Incomplete submission ignored"
            ),
        }

        Ok(SubmitNumbersOutput {
            session_id: session.id,
            session_token: token,
            state,
        })
    }

    async fn resolve_session(&self, session_id: Option<Uuid>) -> HuntResult<Option<HuntSession>> {
        match session_id {
            Some(id) => self.session_repo.get(id).await,
            None => Ok(None),
        }
    }
}
