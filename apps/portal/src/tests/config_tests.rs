use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_read_feeds_from_current_directory() {
    let settings = Settings::default();
    assert_eq!(settings.feed_base, ".");
    assert_eq!(settings.default_sort, SortMode::Featured);
    assert_eq!(settings.output_format, OutputFormat::Html);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
feed_base = "https://portal.example.org/data"
default_sort = "rating"
output_format = "json"
"#,
    )
    .expect("apply file");

    assert_eq!(settings.feed_base, "https://portal.example.org/data");
    assert_eq!(settings.default_sort, SortMode::Rating);
    assert_eq!(settings.output_format, OutputFormat::Json);
}

#[test]
fn unknown_output_format_in_file_is_an_error() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, r#"output_format = "pdf""#).is_err());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("PORTAL_FEED_BASE", "./public"),
            ("APP__FEED_BASE", "./dist"),
            ("APP__DEFAULT_SORT", "DATE"),
            ("APP__OUTPUT_FORMAT", "text"),
        ]),
    )
    .expect("apply env");
    assert_eq!(settings.feed_base, "./dist");
    assert_eq!(settings.default_sort, SortMode::Date);
    assert_eq!(settings.output_format, OutputFormat::Text);
}

#[test]
fn unknown_env_output_format_is_an_error_like_the_file() {
    let mut settings = Settings::default();
    let err = apply_env(&mut settings, env_from(&[("APP__OUTPUT_FORMAT", "pdf")]))
        .expect_err("unknown format");
    assert!(format!("{err:#}").contains("unknown output_format 'pdf'"));
    assert_eq!(settings.output_format, OutputFormat::Html);
}

#[test]
fn load_settings_reads_file_when_present() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("portal_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "default_sort = \"reviews\"\n").expect("write config");

    let settings = load_settings(&path).expect("load settings");
    assert_eq!(settings.default_sort, SortMode::Reviews);

    let missing = load_settings(&temp_root.join("absent.toml")).expect("missing file is fine");
    assert_eq!(missing.default_sort, Settings::default().default_sort);

    fs::remove_dir_all(temp_root).expect("cleanup");
}
