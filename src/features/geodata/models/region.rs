use serde::Deserialize;

/// Geodata service response entry for a first-level region
#[derive(Debug, Clone, Deserialize)]
pub struct RegionEntry {
    pub code: String,
}

/// Geodata service response entry for a sub-region (municipality)
#[derive(Debug, Clone, Deserialize)]
pub struct SubRegionEntry {
    pub name: String,
}
