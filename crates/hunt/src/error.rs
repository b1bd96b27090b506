//! Hunt Error Types
//!
//! Domain-specific error variants mapped to HTTP status codes.
//! Incomplete or wrong submissions are NOT errors: they come back as
//! regular responses carrying the resulting puzzle state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Hunt-specific result type alias
pub type HuntResult<T> = Result<T, HuntError>;

/// Hunt-specific error variants
#[derive(Debug, Error)]
pub enum HuntError {
    /// Route name outside the fixed set
    #[error("Route not found")]
    RouteNotFound,

    /// Submission length differs from the route's field count
    #[error("Expected {expected} entries, got {actual}")]
    WrongEntryCount { expected: usize, actual: usize },

    /// Wishlist requested before the puzzle was solved
    #[error("Wishlist is locked until the puzzle is solved")]
    WishlistLocked,

    /// Upstream map host unreachable or answered with an error status
    #[error("Route sheet fetch failed: {0}")]
    SheetFetch(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HuntError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HuntError::RouteNotFound => StatusCode::NOT_FOUND,
            HuntError::WrongEntryCount { .. } => StatusCode::BAD_REQUEST,
            HuntError::WishlistLocked => StatusCode::FORBIDDEN,
            HuntError::SheetFetch(_) => StatusCode::BAD_GATEWAY,
            HuntError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            HuntError::SheetFetch(e) => {
                tracing::error!(error = %e, "Map host fetch failed");
            }
            HuntError::Internal(msg) => {
                tracing::error!(message = %msg, "Hunt internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Hunt error");
            }
        }
    }
}

impl IntoResponse for HuntError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Empty body: never leak upstream URLs or entry counts
        (status, ()).into_response()
    }
}

impl From<crate::domain::value_objects::UnknownRoute> for HuntError {
    fn from(_: crate::domain::value_objects::UnknownRoute) -> Self {
        HuntError::RouteNotFound
    }
}
