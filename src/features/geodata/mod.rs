//! Region / sub-region lookups against the external geodata service.
//!
//! The geodata service exposes the two-level administrative hierarchy used to
//! scope a collection point's address:
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions` | List first-level regions (codes) |
//! | GET | `/regions/{code}/subregions` | List municipalities in a region (names) |
//!
//! Both lists are consumed as flat display strings; no normalization is
//! applied and nothing is cached or retried.

pub mod clients;
pub mod models;

pub use clients::GeoDataClient;
