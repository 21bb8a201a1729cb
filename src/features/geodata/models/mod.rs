mod region;

pub use region::{RegionEntry, SubRegionEntry};
