//! Catalog store: turns raw feed objects into immutable, indexed catalog items.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::{
    domain::{normalize_label, CatalogItem, ItemKind, ItemLinks},
    error::LoadError,
    protocol::RawItem,
};
use tracing::{info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A loaded catalog. Items are kept in feed order; `original_index` equals the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Parse a feed document and load it. Anything other than an array of objects is rejected.
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let raw: Vec<RawItem> = serde_json::from_slice(bytes).map_err(LoadError::malformed)?;
        Self::load(raw)
    }

    pub fn load(raw_items: Vec<RawItem>) -> Result<Self, LoadError> {
        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| build_item(index, raw))
            .collect::<Result<Vec<_>, _>>()?;
        info!(items = items.len(), "catalog loaded");
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct main categories in first-seen order, as shown on the category tabs.
    pub fn main_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut keys: Vec<String> = Vec::new();
        for item in &self.items {
            let label = item.main_category.trim();
            let key = normalize_label(label);
            if !key.is_empty() && !keys.contains(&key) {
                keys.push(key);
                seen.push(label);
            }
        }
        seen
    }
}

fn build_item(index: usize, raw: RawItem) -> Result<CatalogItem, LoadError> {
    let kind = ItemKind::parse(&raw.kind).ok_or_else(|| {
        LoadError::Malformed(format!(
            "item {index} ({}) has unknown type '{}'",
            raw.name, raw.kind
        ))
    })?;

    let publication_date = raw
        .publication_date
        .as_deref()
        .and_then(|value| parse_publication_date(index, value));

    let links = match kind {
        ItemKind::App => ItemLinks::Store {
            app_store: non_empty(raw.app_store),
            play_store: non_empty(raw.play_store),
        },
        ItemKind::Article | ItemKind::Study => ItemLinks::Resource {
            url: non_empty(raw.url),
        },
    };

    Ok(CatalogItem {
        name: raw.name,
        kind,
        main_category: raw.main_category.unwrap_or_default(),
        genre: raw.genre.unwrap_or_default(),
        subcategories: raw.subcategories.unwrap_or_default(),
        rating: raw.rating,
        review_count: raw.review_count,
        publication_date,
        thumbnail: non_empty(raw.thumbnail),
        description: raw.description.unwrap_or_default(),
        links,
        original_index: index,
    })
}

/// Bare dates are midnight UTC; timestamps keep their instant.
fn parse_publication_date(index: usize, value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date.and_time(NaiveTime::default()).and_utc());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    warn!(
        item = index,
        value, "unparseable publicationDate; treating as absent"
    );
    None
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
