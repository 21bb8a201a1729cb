//! Recyclable-material category catalog.
//!
//! The backend exposes the fixed list of categories a collection point may
//! accept. The catalog is read exactly once at mount; there is no pagination
//! or filtering.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/catalog-items` | List all selectable categories |

pub mod clients;
pub mod models;

pub use clients::ItemCatalogClient;
pub use models::CategoryItem;
