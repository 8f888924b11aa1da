use chrono::{TimeZone, Utc};
use shared::domain::{ItemKind, ItemLinks};

use super::*;
use crate::test_support::{app, sample_catalog, SAMPLE_FEED};

#[test]
fn assigns_original_index_from_feed_position() {
    let catalog = sample_catalog();
    let indexes: Vec<usize> = catalog.items().iter().map(|i| i.original_index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3]);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn maps_feed_keys_onto_item_fields() {
    let catalog = Catalog::from_json(SAMPLE_FEED.as_bytes()).expect("load");
    let calm = &catalog.items()[0];
    assert_eq!(calm.kind, ItemKind::App);
    assert_eq!(calm.main_category, "Mental Health");
    assert_eq!(calm.subcategories, vec!["Sleep", "Anxiety"]);
    assert_eq!(calm.rating, Some(4.6));
    assert_eq!(calm.review_count, Some(1200.0));
    assert_eq!(calm.thumbnail.as_deref(), Some("images/calm.png"));
    assert_eq!(
        calm.links,
        ItemLinks::Store {
            app_store: Some("https://apps.example.com/calm-harbor".into()),
            play_store: Some("https://play.example.com/calm-harbor".into()),
        }
    );

    let article = &catalog.items()[1];
    assert_eq!(article.kind, ItemKind::Article);
    assert_eq!(
        article.publication_date,
        Utc.with_ymd_and_hms(2023, 4, 2, 0, 0, 0).single()
    );

    let study = &catalog.items()[3];
    assert_eq!(
        study.publication_date,
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single()
    );
    assert_eq!(
        study.links,
        ItemLinks::Resource {
            url: Some("https://trials.example.com/exercise".into())
        }
    );
}

#[test]
fn accepts_descriptive_field_aliases() {
    let feed = r#"[{"name":"Nap","kind":"APP","mainCategory":"Sleep","subcategories":["Rest"],"reviewCount":7,"thumbnail":"n.png","description":"Short naps."}]"#;
    let catalog = Catalog::from_json(feed.as_bytes()).expect("load");
    let nap = &catalog.items()[0];
    assert_eq!(nap.kind, ItemKind::App);
    assert_eq!(nap.main_category, "Sleep");
    assert_eq!(nap.subcategories, vec!["Rest"]);
    assert_eq!(nap.review_count, Some(7.0));
    assert_eq!(nap.description, "Short naps.");
}

#[test]
fn missing_optional_fields_stay_absent() {
    let catalog = Catalog::load(vec![app("Bare", None, None)]).expect("load");
    let bare = &catalog.items()[0];
    assert_eq!(bare.rating, None);
    assert_eq!(bare.review_count, None);
    assert_eq!(bare.thumbnail, None);
    assert!(bare.subcategories.is_empty());
    assert_eq!(
        bare.links,
        ItemLinks::Store {
            app_store: None,
            play_store: None
        }
    );
}

#[test]
fn review_counts_accept_any_json_number() {
    let feed = r#"[{"name":"A","type":"app","reviews":1200.0},{"name":"B","type":"app"}]"#;
    let catalog = Catalog::from_json(feed.as_bytes()).expect("load");
    assert_eq!(catalog.items()[0].review_count, Some(1200.0));
    assert_eq!(catalog.items()[1].review_count, None);
}

#[test]
fn rfc3339_publication_date_keeps_its_instant() {
    let feed = r#"[{"name":"Late","type":"study","publicationDate":"2023-05-02T01:30:00+09:00"}]"#;
    let catalog = Catalog::from_json(feed.as_bytes()).expect("load");
    assert_eq!(
        catalog.items()[0].publication_date,
        Utc.with_ymd_and_hms(2023, 5, 1, 16, 30, 0).single()
    );
}

#[test]
fn unparseable_publication_date_is_absent() {
    let feed = r#"[{"name":"Odd","type":"article","publicationDate":"spring 2021"}]"#;
    let catalog = Catalog::from_json(feed.as_bytes()).expect("load");
    assert_eq!(catalog.items()[0].publication_date, None);
}

#[test]
fn non_array_feed_is_malformed() {
    let err = Catalog::from_json(br#"{"name":"not a list"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));

    let err = Catalog::from_json(b"<html>oops</html>").unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn array_of_non_objects_is_malformed() {
    let err = Catalog::from_json(b"[1, 2, 3]").unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn unknown_type_rejects_the_whole_feed() {
    let feed = r#"[{"name":"Ok","type":"app"},{"name":"Pod","type":"podcast"}]"#;
    let err = Catalog::from_json(feed.as_bytes()).unwrap_err();
    match err {
        LoadError::Malformed(reason) => assert!(reason.contains("podcast")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn main_categories_are_distinct_in_feed_order() {
    assert_eq!(sample_catalog().main_categories(), vec!["Mental Health", "Fitness"]);
}

#[test]
fn main_categories_fold_case_beyond_ascii() {
    let feed = r#"[
      {"name":"A","type":"article","main":"ÉTUDE"},
      {"name":"B","type":"article","main":" étude"},
      {"name":"C","type":"app","main":"Sleep"}
    ]"#;
    let catalog = Catalog::from_json(feed.as_bytes()).expect("load");
    assert_eq!(catalog.main_categories(), vec!["ÉTUDE", "Sleep"]);
}
