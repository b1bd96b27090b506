//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Route;
use crate::domain::value_objects::{PuzzleState, RouteName};
use serde::{Deserialize, Serialize};

/// One element of GET /api/hunt/routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub name: RouteName,
    pub field_count: usize,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name,
            field_count: route.field_count(),
        }
    }
}

/// Request for POST /api/hunt/submit
///
/// `route` stays a raw string: an unknown name is a 404 at the
/// handler, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub route: String,
    pub entries: Vec<String>,
}

/// Response for POST /api/hunt/submit and GET /api/hunt/state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleStateResponse {
    pub solved: bool,
    pub show_error: bool,
}

impl From<PuzzleState> for PuzzleStateResponse {
    fn from(state: PuzzleState) -> Self {
        Self {
            solved: state.solved,
            show_error: state.show_error,
        }
    }
}

/// Response for GET /api/hunt/wishlist
#[derive(Debug, Clone, Serialize)]
pub struct WishlistResponse {
    pub items: Vec<String>,
}
