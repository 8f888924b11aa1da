use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use shared::domain::SortMode;

pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HTTP(S) base URL or local directory holding the feed documents.
    pub feed_base: String,
    pub default_sort: SortMode,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed_base: ".".into(),
            default_sort: SortMode::Featured,
            output_format: OutputFormat::Html,
        }
    }
}

/// Defaults, then `path` if it exists, then environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())
        .context("invalid environment override")?;
    Ok(settings)
}

pub fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("feed_base") {
        settings.feed_base = v.clone();
    }
    if let Some(v) = file_cfg.get("default_sort") {
        settings.default_sort = SortMode::from_label(v);
    }
    if let Some(v) = file_cfg.get("output_format") {
        settings.output_format = parse_output_format(v)?;
    }
    Ok(())
}

/// Environment overrides. Malformed values are rejected the same way as in the config file.
pub fn apply_env(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("PORTAL_FEED_BASE") {
        settings.feed_base = v;
    }
    if let Some(v) = lookup("APP__FEED_BASE") {
        settings.feed_base = v;
    }

    if let Some(v) = lookup("APP__DEFAULT_SORT") {
        settings.default_sort = SortMode::from_label(&v);
    }

    if let Some(v) = lookup("APP__OUTPUT_FORMAT") {
        settings.output_format = parse_output_format(&v).context("APP__OUTPUT_FORMAT")?;
    }
    Ok(())
}

fn parse_output_format(label: &str) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_label(label).with_context(|| format!("unknown output_format '{label}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
