//! Portal controller: owns the active main category and reruns
//! filter → sort → render on every event.

use shared::domain::{normalize_label, CatalogItem, FilterSelection, SortMode};
use tracing::debug;

use crate::{filter::filter, render::render, sort::sort, store::Catalog, DisplayRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    /// A main-category tab was clicked. Clicking the active tab clears it.
    MainCategorySelected(String),
    /// The full set of checked boxes after a checkbox change.
    FiltersChanged {
        types: Vec<String>,
        genres: Vec<String>,
        subcategories: Vec<String>,
    },
    SortChanged(SortMode),
}

pub struct Controller {
    catalog: Catalog,
    active_main: Option<String>,
    checked: FilterSelection,
    sort_mode: SortMode,
}

impl Controller {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_main: None,
            checked: FilterSelection::default(),
            sort_mode: SortMode::default(),
        }
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_main(&self) -> Option<&str> {
        self.active_main.as_deref()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Checkbox state plus the active main category.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            main_category: self.active_main.clone(),
            ..self.checked.clone()
        }
    }

    /// The complete view for the current state.
    pub fn refresh(&self) -> Vec<DisplayRecord> {
        run_pipeline(self.catalog.items(), &self.selection(), self.sort_mode)
    }

    pub fn handle(&mut self, event: PortalEvent) -> Vec<DisplayRecord> {
        debug!(?event, "portal event");
        match event {
            PortalEvent::MainCategorySelected(label) => self.toggle_main(&label),
            PortalEvent::FiltersChanged {
                types,
                genres,
                subcategories,
            } => {
                self.checked = FilterSelection::new()
                    .with_types(types)
                    .with_genres(genres)
                    .with_subcategories(subcategories);
            }
            PortalEvent::SortChanged(mode) => self.sort_mode = mode,
        }
        self.refresh()
    }

    fn toggle_main(&mut self, label: &str) {
        let label = normalize_label(label);
        if label.is_empty() || self.active_main.as_deref() == Some(label.as_str()) {
            self.active_main = None;
        } else {
            self.active_main = Some(label);
        }
    }
}

pub fn run_pipeline(
    items: &[CatalogItem],
    selection: &FilterSelection,
    mode: SortMode,
) -> Vec<DisplayRecord> {
    let filtered = filter(items, selection);
    let ordered = sort(filtered, mode);
    render(ordered)
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
