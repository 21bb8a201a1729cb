pub mod catalog;
pub mod geodata;
pub mod geolocation;
pub mod registration;
