//! HTML binding for the portal pages.
//!
//! Markup is built with `maud`, so every interpolated string is escaped. Link
//! targets additionally pass through [`safe_url`] before they reach an attribute.

use catalog_core::{DisplayAction, DisplayRecord};
use maud::{html, DOCTYPE};
use shared::protocol::{Contributor, FaqGroup};
use tracing::debug;
use url::{ParseError, Url};

pub use maud::Markup;

pub const APP_STORE_ICON: &str = "./images/app-store-icon.png";
pub const PLAY_STORE_ICON: &str = "./images/play-store-logo.jpg";
pub const LOAD_ERROR_TEXT: &str = "Error loading data. Please reload the page to try again.";

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returns `raw` if it is a relative reference or uses an allowed scheme.
pub fn safe_url(raw: &str) -> Option<&str> {
    let accepted = match Url::parse(raw) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    };
    if !accepted {
        debug!(url = raw, "dropping link with disallowed target");
    }
    accepted.then_some(raw)
}

fn link(target: Option<&str>) -> Option<&str> {
    target.and_then(safe_url)
}

pub fn catalog_cards(records: &[DisplayRecord]) -> Markup {
    html! {
        @for record in records {
            (card(record))
        }
    }
}

pub fn card(record: &DisplayRecord) -> Markup {
    html! {
        article class={ "card card--" (record.kind.as_str()) } {
            h2 { (record.name) }
            @if let Some(src) = link(record.thumbnail.as_deref()) {
                img src=(src) alt={ (record.name) " thumbnail" };
            }
            (action_block(&record.action))
            p class="description" { (record.description) }
        }
    }
}

fn action_block(action: &DisplayAction) -> Markup {
    match action {
        DisplayAction::StoreLinks {
            app_store,
            play_store,
            rating_badge,
        } => html! {
            div class="store-links" {
                @if let Some(href) = link(app_store.as_deref()) {
                    a href=(href) class="app-store" target="_blank" rel="noopener noreferrer" {
                        "App Store "
                        img src=(APP_STORE_ICON) alt="App Store";
                    }
                }
                @if let Some(href) = link(play_store.as_deref()) {
                    a href=(href) class="play-store" target="_blank" rel="noopener noreferrer" {
                        "Play Store "
                        img src=(PLAY_STORE_ICON) alt="Play Store";
                    }
                }
                span class="store-rating" { (rating_badge) }
            }
        },
        DisplayAction::ReadMore { label, url } => html! {
            a href=[link(url.as_deref())] class="read-more" target="_blank" rel="noopener noreferrer" {
                (label)
            }
        },
    }
}

/// FAQ accordion markup. Open/close state is left to the page's script.
pub fn faq_sections(groups: &[FaqGroup]) -> Markup {
    html! {
        @for group in groups {
            h2 class="faq-category" { (group.category) }
            @for entry in &group.entries {
                div class="faq-item" {
                    button class="faq-question" {
                        (entry.question) " "
                        span class="faq-arrow" { "▼" }
                    }
                    div class="faq-answer" {
                        p class="faq-p" { (entry.answer) }
                    }
                }
            }
        }
    }
}

pub fn contributor_cards(people: &[Contributor]) -> Markup {
    html! {
        @for person in people {
            div class="profile-card" {
                @if let Some(src) = link(person.image.as_deref()) {
                    img src=(src) alt=(person.name) class="profile-img";
                }
                h3 { (person.name) }
                p { (person.title) }
                @if !person.email.trim().is_empty() {
                    p {
                        "Email: "
                        a href=[safe_mailto(&person.email)] { (person.email) }
                    }
                }
                @if let Some(phone) = person.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                    p { "Phone: " (phone) }
                }
            }
        }
    }
}

fn safe_mailto(email: &str) -> Option<String> {
    let target = format!("mailto:{}", email.trim());
    let accepted = safe_url(&target).is_some();
    accepted.then_some(target)
}

/// Shown in place of the content area when a feed fails to load.
pub fn load_error() -> Markup {
    html! {
        p class="load-error" role="alert" { (LOAD_ERROR_TEXT) }
    }
}

/// Wraps page content in a standalone document.
pub fn document(title: &str, container_id: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="style.css";
            }
            body {
                main id=(container_id) { (content) }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
