//! Hunt Router

use crate::application::config::HuntConfig;
use crate::domain::repository::{SessionRepository, SheetFetcher};
use crate::infra::map_host::MapHostFetcher;
use crate::infra::memory::InMemorySessionRepository;
use crate::presentation::handlers::{self, HuntAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the hunt router with the default in-memory store and map host
pub fn hunt_router(config: HuntConfig) -> Router {
    let fetcher = MapHostFetcher::new(config.map_base_url.clone());
    hunt_router_generic(InMemorySessionRepository::new(), fetcher, config)
}

/// Create a hunt router for any repository and fetcher implementation
pub fn hunt_router_generic<S, F>(repo: S, fetcher: F, config: HuntConfig) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    let state = HuntAppState {
        repo: Arc::new(repo),
        fetcher: Arc::new(fetcher),
        config: Arc::new(config),
    };

    Router::new()
        .route("/routes", get(handlers::list_routes::<S, F>))
        .route("/routes/{route}/sheet", get(handlers::download_sheet::<S, F>))
        .route("/submit", post(handlers::submit_numbers::<S, F>))
        .route("/state", get(handlers::check_state::<S, F>))
        .route("/wishlist", get(handlers::wishlist::<S, F>))
        .with_state(state)
}
