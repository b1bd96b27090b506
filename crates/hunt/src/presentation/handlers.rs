//! HTTP Handlers

use crate::application::check_puzzle::CheckPuzzleUseCase;
use crate::application::config::HuntConfig;
use crate::application::fetch_sheet::FetchSheetUseCase;
use crate::application::session_token;
use crate::application::submit_numbers::{SubmitNumbersInput, SubmitNumbersUseCase};
use crate::domain::repository::{SessionRepository, SheetFetcher};
use crate::domain::value_objects::RouteName;
use crate::error::{HuntError, HuntResult};
use crate::presentation::dto::{
    PuzzleStateResponse, RouteSummary, SubmitRequest, WishlistResponse,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for hunt handlers
#[derive(Clone)]
pub struct HuntAppState<S, F>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub fetcher: Arc<F>,
    pub config: Arc<HuntConfig>,
}

/// GET /api/hunt/routes
pub async fn list_routes<S, F>(State(state): State<HuntAppState<S, F>>) -> Json<Vec<RouteSummary>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    Json(state.config.routes.iter().map(RouteSummary::from).collect())
}

/// GET /api/hunt/routes/{route}/sheet
pub async fn download_sheet<S, F>(
    State(state): State<HuntAppState<S, F>>,
    Path(route): Path<String>,
) -> HuntResult<impl IntoResponse>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    let name: RouteName = route.parse()?;

    let use_case = FetchSheetUseCase::new(state.fetcher.clone(), state.config.clone());
    let output = use_case.execute(name).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", output.filename),
            ),
        ],
        output.content,
    ))
}

/// POST /api/hunt/submit
pub async fn submit_numbers<S, F>(
    State(state): State<HuntAppState<S, F>>,
    headers: HeaderMap,
    Json(req): Json<SubmitRequest>,
) -> HuntResult<Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    let route: RouteName = req.route.parse()?;
    let session_id = session_from_cookie(&state.config, &headers);

    let use_case = SubmitNumbersUseCase::new(state.repo.clone(), state.config.clone());

    let input = SubmitNumbersInput {
        route,
        entries: req.entries,
    };

    let output = use_case.execute(input, session_id).await?;

    let mut response = Json(PuzzleStateResponse::from(output.state)).into_response();
    if let Some(token) = output.session_token {
        let cookie = state.config.session_cookie().set(&token);
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| HuntError::Internal(format!("Invalid cookie header: {e}")))?;
        response.headers_mut().insert(header::SET_COOKIE, value);
    }

    Ok(response)
}

/// GET /api/hunt/state
pub async fn check_state<S, F>(
    State(state): State<HuntAppState<S, F>>,
    headers: HeaderMap,
) -> HuntResult<Json<PuzzleStateResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    let token = state.config.session_cookie().read(&headers);

    let use_case = CheckPuzzleUseCase::new(state.repo.clone(), state.config.clone());
    let puzzle = use_case.state(token.as_deref()).await?;

    Ok(Json(puzzle.into()))
}

/// GET /api/hunt/wishlist
pub async fn wishlist<S, F>(
    State(state): State<HuntAppState<S, F>>,
    headers: HeaderMap,
) -> HuntResult<Json<WishlistResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    F: SheetFetcher + Clone + Send + Sync + 'static,
{
    let token = state.config.session_cookie().read(&headers);

    let use_case = CheckPuzzleUseCase::new(state.repo.clone(), state.config.clone());
    let items = use_case.wishlist(token.as_deref()).await?;

    Ok(Json(WishlistResponse { items }))
}

/// Read and verify the session cookie, `None` on anything invalid
fn session_from_cookie(config: &HuntConfig, headers: &HeaderMap) -> Option<Uuid> {
    let token = config.session_cookie().read(headers)?;
    session_token::verify(&token, &config.session_secret)
}
