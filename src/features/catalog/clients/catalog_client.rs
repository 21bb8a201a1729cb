use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};
use crate::features::catalog::models::CategoryItem;
use crate::shared::constants::CATALOG_PATH;

/// Client for the backend's category catalog endpoint
pub struct ItemCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemCatalogClient {
    pub fn new(config: &BackendConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch the ordered category catalog
    pub async fn fetch_catalog(&self) -> Result<Vec<CategoryItem>> {
        let url = format!("{}/{}", self.base_url, CATALOG_PATH);

        tracing::debug!("Fetching category catalog: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Catalog request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Catalog request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Catalog endpoint returned status: {}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Catalog endpoint error: HTTP {}",
                status
            )));
        }

        let items = response.json::<Vec<CategoryItem>>().await.map_err(|e| {
            tracing::error!("Failed to parse catalog response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse catalog response: {}", e))
        })?;

        tracing::debug!("Catalog loaded: {} categories", items.len());

        Ok(items)
    }
}
