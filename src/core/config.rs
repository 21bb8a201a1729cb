use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub geodata: GeoDataConfig,
    pub geolocation: GeolocationConfig,
    pub map: MapConfig,
    pub attachment: AttachmentConfig,
}

/// Application backend API (catalog items, point creation)
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

/// External geodata service providing region / sub-region name lists
#[derive(Debug, Clone)]
pub struct GeoDataConfig {
    pub base_url: String,
}

/// IP-geolocation service used to seed the initial map viewport
#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Slippy-map tile URL template with {z}/{x}/{y} placeholders
    pub tile_url_template: String,
    pub default_zoom: u8,
}

#[derive(Debug, Clone)]
pub struct AttachmentConfig {
    pub max_image_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            backend: BackendConfig::from_env()?,
            geodata: GeoDataConfig::from_env()?,
            geolocation: GeolocationConfig::from_env()?,
            map: MapConfig::from_env()?,
            attachment: AttachmentConfig::from_env()?,
        })
    }
}

impl BackendConfig {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        let request_timeout_secs = env::var("API_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "API_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl GeoDataConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("GEODATA_BASE_URL")
            .unwrap_or_else(|_| "https://geodata.ecopoint.app/api/v1".to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl GeolocationConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("GEOLOCATION_BASE_URL").unwrap_or_else(|_| "http://ip-api.com".to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl MapConfig {
    const DEFAULT_ZOOM: u8 = 15;

    pub fn from_env() -> Result<Self, String> {
        let tile_url_template = env::var("MAP_TILE_URL_TEMPLATE")
            .unwrap_or_else(|_| "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string());

        let default_zoom = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_DEFAULT_ZOOM must be a valid number".to_string())?;

        Ok(Self {
            tile_url_template,
            default_zoom,
        })
    }
}

impl AttachmentConfig {
    const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let max_image_bytes = env::var("MAX_IMAGE_BYTES")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_IMAGE_BYTES.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_IMAGE_BYTES must be a valid number".to_string())?;

        Ok(Self { max_image_bytes })
    }
}
