//! Filter engine. Every active clause must pass; relative order is preserved.

use std::collections::BTreeSet;

use shared::domain::{normalize_label, CatalogItem, FilterSelection};

pub fn filter<'a, I>(items: I, selection: &FilterSelection) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .filter(|item| matches(item, selection))
        .collect()
}

pub fn matches(item: &CatalogItem, selection: &FilterSelection) -> bool {
    main_category_ok(item, selection)
        && type_ok(item, selection)
        && genre_ok(item, selection)
        && subcategory_ok(item, selection)
}

fn main_category_ok(item: &CatalogItem, selection: &FilterSelection) -> bool {
    match &selection.main_category {
        None => true,
        Some(main) => normalize_label(&item.main_category) == normalize_label(main),
    }
}

fn type_ok(item: &CatalogItem, selection: &FilterSelection) -> bool {
    selection.types.is_empty() || contains_label(&selection.types, item.kind.as_str())
}

fn genre_ok(item: &CatalogItem, selection: &FilterSelection) -> bool {
    selection.genres.is_empty() || contains_label(&selection.genres, &item.genre)
}

fn subcategory_ok(item: &CatalogItem, selection: &FilterSelection) -> bool {
    selection.subcategories.is_empty()
        || item
            .subcategories
            .iter()
            .any(|sub| contains_label(&selection.subcategories, sub))
}

/// Selections built through the `with_*` builders are already normalized; literals may not be.
fn contains_label(labels: &BTreeSet<String>, label: &str) -> bool {
    let label = normalize_label(label);
    labels.contains(&label) || labels.iter().any(|l| normalize_label(l) == label)
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
