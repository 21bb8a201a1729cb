use serde::{Deserialize, Serialize};

/// A selectable recyclable-material category from the backend catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}
