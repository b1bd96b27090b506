//! Map Host Client
//!
//! Fetches route sheets from the upstream raw-file host. The original
//! page did not handle a failed download at all; here an upstream
//! error surfaces as `HuntError::SheetFetch` (502 at the boundary).

use crate::domain::entities::Route;
use crate::domain::repository::SheetFetcher;
use crate::error::HuntResult;

/// HTTP fetcher against the configured map host
#[derive(Clone)]
pub struct MapHostFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl MapHostFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn sheet_url(&self, route: &Route) -> String {
        format!("{}/{}", self.base_url, route.sheet_file())
    }
}

impl SheetFetcher for MapHostFetcher {
    async fn fetch(&self, route: &Route) -> HuntResult<Vec<u8>> {
        let url = self.sheet_url(route);
        tracing::debug!(%url, "Fetching route sheet");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
