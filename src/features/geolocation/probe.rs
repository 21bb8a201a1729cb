use serde::Deserialize;

use crate::core::config::GeolocationConfig;
use crate::core::error::{AppError, Result};
use crate::shared::types::Coordinate;

/// IP-geolocation service response
#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

/// Probe for the device's current position via IP-geolocation
pub struct GeolocationProbe {
    client: reqwest::Client,
    base_url: String,
}

impl GeolocationProbe {
    pub fn new(config: &GeolocationConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Request the current position once
    pub async fn request_current_position(&self) -> Result<Coordinate> {
        let url = format!("{}/json", self.base_url);

        tracing::debug!("Requesting current position: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Geolocation request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Geolocation request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalServiceError(format!(
                "Geolocation service error: HTTP {}",
                status
            )));
        }

        let body = response.json::<GeolocationResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse geolocation response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse geolocation response: {}", e))
        })?;

        Self::into_coordinate(body)
    }

    fn into_coordinate(body: GeolocationResponse) -> Result<Coordinate> {
        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| body.status.clone());
            return Err(AppError::ExternalServiceError(format!(
                "Geolocation lookup failed: {}",
                reason
            )));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
            _ => Err(AppError::ExternalServiceError(
                "Geolocation response missing coordinates".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_lookup_yields_coordinate() {
        let body: GeolocationResponse =
            serde_json::from_str(r#"{ "status": "success", "lat": 40.0, "lon": -70.0 }"#).unwrap();
        let coord = GeolocationProbe::into_coordinate(body).unwrap();
        assert_eq!(coord, Coordinate::new(40.0, -70.0));
    }

    #[test]
    fn test_failed_lookup_carries_service_message() {
        let body: GeolocationResponse = serde_json::from_str(
            r#"{ "status": "fail", "message": "private range", "lat": null, "lon": null }"#,
        )
        .unwrap();
        let err = GeolocationProbe::into_coordinate(body).unwrap_err();
        assert!(err.to_string().contains("private range"));
    }

    #[test]
    fn test_success_without_coordinates_is_an_error() {
        let body: GeolocationResponse =
            serde_json::from_str(r#"{ "status": "success", "lat": 40.0, "lon": null }"#).unwrap();
        assert!(GeolocationProbe::into_coordinate(body).is_err());
    }
}
