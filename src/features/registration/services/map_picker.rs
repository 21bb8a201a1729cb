use crate::core::config::MapConfig;
use crate::shared::types::Coordinate;

/// Interactive map position picker.
///
/// Tracks two coordinates with different lifecycles: the viewport center,
/// which is seeded once from the geolocation probe and never moves again, and
/// the pin, which starts at the center and is overwritten by every click.
#[derive(Debug, Clone)]
pub struct MapPicker {
    center: Coordinate,
    pin: Coordinate,
    zoom: u8,
    tile_url_template: String,
    seeded: bool,
}

impl MapPicker {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center: Coordinate::default(),
            pin: Coordinate::default(),
            zoom: config.default_zoom,
            tile_url_template: config.tile_url_template.clone(),
            seeded: false,
        }
    }

    /// Seed the viewport center and pin from the geolocation probe.
    ///
    /// Only the first call takes effect; the viewport center is immutable
    /// once established.
    pub fn seed(&mut self, position: Coordinate) {
        if self.seeded {
            return;
        }
        self.center = position;
        self.pin = position;
        self.seeded = true;
    }

    /// Place the pin. Last click wins, no bounds checking.
    pub fn click(&mut self, position: Coordinate) {
        self.pin = position;
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn pin(&self) -> Coordinate {
        self.pin
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Tile URL for the viewport center, for rendering a map preview
    pub fn center_tile_url(&self) -> String {
        let (x, y) = Self::tile_indices(self.center, self.zoom);
        self.tile_url_template
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }

    /// Slippy-map tile indices for a coordinate at a zoom level
    fn tile_indices(coord: Coordinate, zoom: u8) -> (u32, u32) {
        let n = 2f64.powi(zoom as i32);
        let x = ((coord.lng + 180.0) / 360.0 * n).floor();
        let lat_rad = coord.lat.to_radians();
        let y = ((1.0 - lat_rad.tan().asinh() / std::f64::consts::PI) / 2.0 * n).floor();
        (
            (x.clamp(0.0, n - 1.0)) as u32,
            (y.clamp(0.0, n - 1.0)) as u32,
        )
    }
}
