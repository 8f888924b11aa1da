//! Catalog pipeline for the portal pages.
//!
//! ```text
//! feed (apps.json) ──► store::Catalog ──► filter ──► sort ──► render ──► Vec<DisplayRecord>
//!                                           ▲          ▲
//!                                           └─ controller::Controller (active main, checks, sort mode)
//! ```
//!
//! The FAQ and contributors pages share the same feed plumbing through
//! [`feed::load_page`], keyed by [`shared::domain::PageKind`].

pub mod controller;
pub mod faq;
pub mod feed;
pub mod filter;
pub mod render;
pub mod sort;
pub mod store;

pub use controller::{run_pipeline, Controller, PortalEvent};
pub use faq::group_faqs;
pub use feed::{load_page, source_for, DirFeedSource, FeedSource, HttpFeedSource, PageData};
pub use filter::filter;
pub use render::{render, DisplayAction, DisplayRecord};
pub use sort::sort;
pub use store::Catalog;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
