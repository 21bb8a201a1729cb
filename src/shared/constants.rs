/// Multipart field name for the optional image attachment
pub const IMAGE_FIELD: &str = "image";

/// Multipart field name for the comma-joined category ids
pub const ITEMS_FIELD: &str = "items";

/// Path of the point-creation endpoint on the backend
pub const POINTS_PATH: &str = "points";

/// Path of the catalog listing endpoint on the backend
pub const CATALOG_PATH: &str = "catalog-items";
