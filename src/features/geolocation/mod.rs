//! One-shot device position lookup.
//!
//! Seeds the initial map viewport center and pin. The lookup runs once at
//! mount; on failure the map simply stays at the (0,0) default.

mod probe;

pub use probe::GeolocationProbe;
