//! Feed documents as they arrive on the wire.

use serde::{Deserialize, Serialize};

/// One catalog object from `apps.json`, before the store assigns its index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    #[serde(default, rename = "main", alias = "mainCategory")]
    pub main_category: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default, rename = "subs", alias = "subcategories")]
    pub subcategories: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "reviews", alias = "reviewCount")]
    pub review_count: Option<f64>,
    #[serde(default, rename = "publicationDate")]
    pub publication_date: Option<String>,
    #[serde(default, rename = "app")]
    pub app_store: Option<String>,
    #[serde(default, rename = "play")]
    pub play_store: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "logo", alias = "thumbnail")]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "desc", alias = "description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqGroup {
    pub category: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
