use crate::core::config::GeoDataConfig;
use crate::core::error::{AppError, Result};
use crate::features::geodata::models::{RegionEntry, SubRegionEntry};

/// Client for the external geodata service
pub struct GeoDataClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoDataClient {
    pub fn new(config: &GeoDataConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the ordered list of first-level region codes
    pub async fn fetch_regions(&self) -> Result<Vec<String>> {
        let url = format!("{}/regions", self.base_url);

        tracing::debug!("Fetching regions: {}", url);

        let entries: Vec<RegionEntry> = self.execute_request(&url).await?;

        Ok(entries.into_iter().map(|e| e.code).collect())
    }

    /// Fetch the ordered list of sub-region names for a region
    pub async fn fetch_sub_regions(&self, region: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/regions/{}/subregions",
            self.base_url,
            urlencoding::encode(region)
        );

        tracing::debug!("Fetching sub-regions for {}: {}", region, url);

        let entries: Vec<SubRegionEntry> = self.execute_request(&url).await?;

        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    async fn execute_request<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Geodata request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Geodata request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Geodata service returned status: {}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Geodata service error: HTTP {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse geodata response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse geodata response: {}", e))
        })
    }
}
