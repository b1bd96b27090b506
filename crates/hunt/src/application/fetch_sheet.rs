//! Fetch Route Sheet Use Case
//!
//! Retrieves the per-route PDF from the map host and hands it back
//! together with the download filename.

use crate::application::config::HuntConfig;
use crate::domain::repository::SheetFetcher;
use crate::domain::value_objects::RouteName;
use crate::error::{HuntError, HuntResult};
use std::sync::Arc;

/// Output DTO for fetch route sheet
#[derive(Debug, Clone)]
pub struct FetchSheetOutput {
    /// Download filename, `<Route>.pdf`
    pub filename: String,
    pub content: Vec<u8>,
}

/// Fetch Route Sheet Use Case
pub struct FetchSheetUseCase<F>
where
    F: SheetFetcher,
{
    fetcher: Arc<F>,
    config: Arc<HuntConfig>,
}

impl<F> FetchSheetUseCase<F>
where
    F: SheetFetcher,
{
    pub fn new(fetcher: Arc<F>, config: Arc<HuntConfig>) -> Self {
        Self { fetcher, config }
    }

    pub async fn execute(&self, name: RouteName) -> HuntResult<FetchSheetOutput> {
        let route = self.config.route(name).ok_or(HuntError::RouteNotFound)?;

        let content = self.fetcher.fetch(route).await?;

        tracing::info!(
            route = %route.name,
            bytes = content.len(),
            "Route sheet fetched"
        );

        Ok(FetchSheetOutput {
            filename: route.sheet_file(),
            content,
        })
    }
}
