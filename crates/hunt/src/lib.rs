//! Hunt Backend Module
//!
//! Treasure-hunt puzzle backend: route selection, route-sheet download,
//! and the sequence-validation state machine behind the hidden wishlist.
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - In-memory session store, map-host client
//! - `presentation/` - HTTP handlers
//!
//! ## State Model
//! - Each browser session holds one `PuzzleState { solved, show_error }`
//! - `solved` is monotonic: once a session solves its route, no later
//!   submission can unsolve it
//! - Sessions are HTTP-only cookies carrying an HMAC-signed session id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::HuntConfig;
pub use error::{HuntError, HuntResult};
pub use infra::map_host::MapHostFetcher;
pub use infra::memory::InMemorySessionRepository;
pub use presentation::router::hunt_router;

#[cfg(test)]
mod tests;
