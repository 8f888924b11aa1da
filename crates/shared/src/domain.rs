use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    App,
    Article,
    Study,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Article => "article",
            Self::Study => "study",
        }
    }

    /// Case-insensitive match against the feed's `type` labels.
    pub fn parse(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "app" => Some(Self::App),
            "article" => Some(Self::Article),
            "study" => Some(Self::Study),
            _ => None,
        }
    }

    pub fn is_publication(self) -> bool {
        matches!(self, Self::Article | Self::Study)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Featured,
    Name,
    Rating,
    Reviews,
    Date,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        Self::Featured,
        Self::Name,
        Self::Rating,
        Self::Reviews,
        Self::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Name => "name",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Date => "date",
        }
    }

    /// Unknown labels select featured order, the sort menu's default entry.
    pub fn from_label(label: &str) -> Self {
        let label = normalize_label(label);
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == label)
            .unwrap_or_default()
    }

    /// Kinds that survive the sort; `None` keeps every item.
    pub fn restriction(self) -> Option<&'static [ItemKind]> {
        match self {
            Self::Featured | Self::Name => None,
            Self::Rating | Self::Reviews => Some(&[ItemKind::App]),
            Self::Date => Some(&[ItemKind::Article, ItemKind::Study]),
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which page a feed belongs to. Each page loads exactly one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Portal,
    Faq,
    Contributors,
}

impl PageKind {
    pub fn feed_document(self) -> &'static str {
        match self {
            Self::Portal => "apps.json",
            Self::Faq => "faq.json",
            Self::Contributors => "contributors.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemLinks {
    Store {
        app_store: Option<String>,
        play_store: Option<String>,
    },
    Resource {
        url: Option<String>,
    },
}

/// One loaded catalog entry. Built once by the catalog store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub name: String,
    pub kind: ItemKind,
    pub main_category: String,
    pub genre: String,
    pub subcategories: Vec<String>,
    pub rating: Option<f64>,
    pub review_count: Option<f64>,
    pub publication_date: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
    pub description: String,
    pub links: ItemLinks,
    /// Position in the source feed; featured order and the date tie-break.
    pub original_index: usize,
}

impl CatalogItem {
    /// Missing and negative-zero ratings both read as `0.0`.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0) + 0.0
    }

    pub fn review_count_or_zero(&self) -> f64 {
        self.review_count.unwrap_or(0.0) + 0.0
    }

    pub fn publication_date_or_earliest(&self) -> DateTime<Utc> {
        self.publication_date.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Current filter inputs. Labels are stored normalized (trimmed, lower-case).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub main_category: Option<String>,
    pub types: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub subcategories: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main_category(mut self, label: Option<&str>) -> Self {
        self.main_category = label.map(normalize_label);
        self
    }

    pub fn with_types<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.types = normalize_labels(labels);
        self
    }

    pub fn with_genres<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genres = normalize_labels(labels);
        self
    }

    pub fn with_subcategories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subcategories = normalize_labels(labels);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.main_category.is_none()
            && self.types.is_empty()
            && self.genres.is_empty()
            && self.subcategories.is_empty()
    }
}

pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

fn normalize_labels<I, S>(labels: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| normalize_label(label.as_ref()))
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
