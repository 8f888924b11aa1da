//! Sort engine.
//!
//! Restricted modes drop items of other kinds before ordering: `rating` and `reviews`
//! keep apps only, `date` keeps articles and studies only. Every comparator ends in
//! `original_index`.

use std::cmp::Ordering;

use shared::domain::{CatalogItem, SortMode};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

pub fn sort<'a, I>(items: I, mode: SortMode) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let restriction = mode.restriction();
    let mut view: Vec<&CatalogItem> = items
        .into_iter()
        .filter(|item| restriction.map_or(true, |kinds| kinds.contains(&item.kind)))
        .collect();
    view.sort_by(|a, b| compare(a, b, mode));
    view
}

pub fn compare(a: &CatalogItem, b: &CatalogItem, mode: SortMode) -> Ordering {
    let primary = match mode {
        SortMode::Featured => Ordering::Equal,
        SortMode::Name => name_order(&a.name, &b.name),
        SortMode::Rating => b
            .rating_or_zero()
            .total_cmp(&a.rating_or_zero())
            .then_with(|| name_order(&a.name, &b.name)),
        SortMode::Reviews => b
            .review_count_or_zero()
            .total_cmp(&a.review_count_or_zero())
            .then_with(|| name_order(&a.name, &b.name)),
        SortMode::Date => b
            .publication_date_or_earliest()
            .cmp(&a.publication_date_or_earliest()),
    };
    primary.then_with(|| a.original_index.cmp(&b.original_index))
}

/// Collation-style name ordering.
///
/// Letters compare first with accents and case folded away (`Éclair` sorts
/// with the `e`s), then accented after unaccented, then lower-case before
/// upper-case, then by code point.
pub fn name_order(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_order(a).cmp(case_order(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn case_order(name: &str) -> impl Iterator<Item = (bool, char)> + '_ {
    name.nfd().map(|c| (c.is_uppercase(), c))
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
