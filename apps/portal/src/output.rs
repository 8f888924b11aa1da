//! Turns page data into the selected output format.

use std::fmt::Write as _;

use catalog_core::{DisplayAction, DisplayRecord};
use presentation::Markup;
use shared::{
    domain::PageKind,
    error::{ErrorReport, LoadError},
    protocol::{Contributor, FaqGroup},
};

use crate::config::OutputFormat;

/// Page title and the id of the element the page's content replaces.
fn page_frame(page: PageKind) -> (&'static str, &'static str) {
    match page {
        PageKind::Portal => ("Portal", "cards"),
        PageKind::Faq => ("FAQ", "faq-container"),
        PageKind::Contributors => ("Contributors", "profile-container"),
    }
}

fn html(page: PageKind, content: Markup, standalone: bool) -> String {
    if standalone {
        let (title, container) = page_frame(page);
        presentation::document(title, container, content).into_string()
    } else {
        content.into_string()
    }
}

pub fn catalog(
    records: &[DisplayRecord],
    format: OutputFormat,
    standalone: bool,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Html => html(
            PageKind::Portal,
            presentation::catalog_cards(records),
            standalone,
        ),
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for record in records {
                let detail = match &record.action {
                    DisplayAction::StoreLinks { rating_badge, .. } => rating_badge.as_str(),
                    DisplayAction::ReadMore { label, .. } => label.as_str(),
                };
                writeln!(out, "{} [{}] {}", record.name, record.kind, detail)?;
            }
            out
        }
    })
}

pub fn faq(groups: &[FaqGroup], format: OutputFormat, standalone: bool) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Html => html(PageKind::Faq, presentation::faq_sections(groups), standalone),
        OutputFormat::Json => serde_json::to_string_pretty(groups)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for group in groups {
                writeln!(out, "## {}", group.category)?;
                for entry in &group.entries {
                    writeln!(out, "Q: {}", entry.question)?;
                    writeln!(out, "A: {}", entry.answer)?;
                }
            }
            out
        }
    })
}

pub fn contributors(
    people: &[Contributor],
    format: OutputFormat,
    standalone: bool,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Html => html(
            PageKind::Contributors,
            presentation::contributor_cards(people),
            standalone,
        ),
        OutputFormat::Json => serde_json::to_string_pretty(people)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for person in people {
                write!(out, "{} ({}) <{}>", person.name, person.title, person.email)?;
                if let Some(phone) = &person.phone {
                    write!(out, " {phone}")?;
                }
                out.push('\n');
            }
            out
        }
    })
}

/// The error state that replaces a page's content when its feed fails.
pub fn load_error(
    page: PageKind,
    error: &LoadError,
    format: OutputFormat,
    standalone: bool,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Html => html(page, presentation::load_error(), standalone),
        OutputFormat::Json => serde_json::to_string_pretty(&ErrorReport::from(error))?,
        OutputFormat::Text => format!("{}\n", presentation::LOAD_ERROR_TEXT),
    })
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
