mod geodata_client;

pub use geodata_client::GeoDataClient;
