use shared::{domain::CatalogItem, protocol::RawItem};

use crate::store::Catalog;

pub(crate) const SAMPLE_FEED: &str = r#"[
  {
    "name": "Calm Harbor",
    "type": "app",
    "main": "Mental Health",
    "genre": "Wellness",
    "subs": ["Sleep", "Anxiety"],
    "rating": 4.6,
    "reviews": 1200,
    "app": "https://apps.example.com/calm-harbor",
    "play": "https://play.example.com/calm-harbor",
    "logo": "images/calm.png",
    "desc": "Guided breathing."
  },
  {
    "name": "Sleep and Mood",
    "type": "Article",
    "main": "Mental Health",
    "genre": "Research",
    "subs": ["Sleep"],
    "publicationDate": "2023-04-02",
    "url": "https://journal.example.com/sleep-mood",
    "logo": "images/article.png",
    "desc": "A review."
  },
  {
    "name": "StepCounter",
    "type": "app",
    "main": "Fitness",
    "genre": "Tracking",
    "subs": ["Walking"],
    "rating": 3.9,
    "play": "https://play.example.com/steps",
    "desc": "Counts steps."
  },
  {
    "name": "Exercise Trial",
    "type": "study",
    "main": "Fitness",
    "genre": "Research",
    "subs": ["Walking", "Cardio"],
    "publicationDate": "2024-01-15T08:00:00Z",
    "url": "https://trials.example.com/exercise",
    "desc": "Randomised trial."
  }
]"#;

pub(crate) fn app(name: &str, rating: Option<f64>, reviews: Option<f64>) -> RawItem {
    RawItem {
        name: name.to_string(),
        kind: "app".to_string(),
        main_category: Some("General".to_string()),
        genre: Some("Wellness".to_string()),
        rating,
        review_count: reviews,
        ..RawItem::default()
    }
}

pub(crate) fn publication(name: &str, kind: &str, date: Option<&str>) -> RawItem {
    RawItem {
        name: name.to_string(),
        kind: kind.to_string(),
        main_category: Some("General".to_string()),
        genre: Some("Research".to_string()),
        publication_date: date.map(str::to_string),
        url: Some(format!("https://example.com/{name}")),
        ..RawItem::default()
    }
}

pub(crate) fn catalog(raw: Vec<RawItem>) -> Catalog {
    Catalog::load(raw).expect("load catalog")
}

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_FEED.as_bytes()).expect("sample feed")
}

pub(crate) fn names<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<&'a str> {
    items.into_iter().map(|item| item.name.as_str()).collect()
}
