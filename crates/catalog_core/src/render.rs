//! Renderer: maps ordered catalog items to display records. No markup is produced here;
//! the `presentation` crate owns escaping.

use serde::Serialize;
use shared::domain::{CatalogItem, ItemKind, ItemLinks};

const STAR: char = '★';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub kind: ItemKind,
    pub thumbnail: Option<String>,
    pub description: String,
    pub action: DisplayAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayAction {
    StoreLinks {
        app_store: Option<String>,
        play_store: Option<String>,
        rating_badge: String,
    },
    ReadMore {
        label: String,
        url: Option<String>,
    },
}

pub fn render<'a, I>(items: I) -> Vec<DisplayRecord>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items.into_iter().map(display_record).collect()
}

pub fn display_record(item: &CatalogItem) -> DisplayRecord {
    let action = match &item.links {
        ItemLinks::Store {
            app_store,
            play_store,
        } => DisplayAction::StoreLinks {
            app_store: app_store.clone(),
            play_store: play_store.clone(),
            rating_badge: rating_badge(item.rating),
        },
        ItemLinks::Resource { url } => DisplayAction::ReadMore {
            label: read_more_label(item.kind).to_string(),
            url: url.clone(),
        },
    };

    DisplayRecord {
        name: item.name.clone(),
        kind: item.kind,
        thumbnail: item.thumbnail.clone(),
        description: item.description.clone(),
        action,
    }
}

/// Badge text for an app rating. A missing or zero rating shows the bare star.
pub fn rating_badge(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value != 0.0 => format!("{value}{STAR}"),
        _ => STAR.to_string(),
    }
}

pub fn read_more_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Study => "Read Study",
        ItemKind::App | ItemKind::Article => "Read Article",
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
