//! Feed sources. Each page fetches exactly one document, once, with no retry.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::{header::CACHE_CONTROL, Client};
use serde::de::DeserializeOwned;
use shared::{
    domain::PageKind,
    error::LoadError,
    protocol::{Contributor, FaqEntry, FaqGroup},
};
use tracing::{debug, info};
use url::Url;

use crate::{faq::group_faqs, store::Catalog};

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable location of `document`, used in errors and logs.
    fn locate(&self, document: &str) -> String;
    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError>;
}

/// Fetches documents relative to an HTTP(S) base URL, bypassing caches.
pub struct HttpFeedSource {
    client: Client,
    base: Url,
}

impl HttpFeedSource {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, LoadError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| LoadError::unreachable(base_url, format!("invalid base url: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    fn document_url(&self, document: &str) -> Result<Url, LoadError> {
        self.base
            .join(document)
            .map_err(|e| LoadError::unreachable(self.base.as_str(), e))
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn locate(&self, document: &str) -> String {
        self.document_url(document)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}{document}", self.base))
    }

    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.document_url(document)?;
        debug!(%url, "fetching feed document");
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| LoadError::unreachable(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::unreachable(url.as_str(), e))?;
        Ok(body.to_vec())
    }
}

/// Reads documents from a local directory, e.g. a checked-out static site.
pub struct DirFeedSource {
    root: PathBuf,
}

impl DirFeedSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FeedSource for DirFeedSource {
    fn locate(&self, document: &str) -> String {
        self.root.join(document).display().to_string()
    }

    async fn fetch(&self, document: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(document);
        debug!(path = %path.display(), "reading feed document");
        tokio::fs::read(&path)
            .await
            .map_err(|e| LoadError::unreachable(path.display().to_string(), e))
    }
}

/// `http://` and `https://` locations fetch over the network; anything else is a directory.
pub fn source_for(location: &str) -> Result<Box<dyn FeedSource>, LoadError> {
    let lower = location.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Box::new(HttpFeedSource::new(location.trim())?))
    } else {
        Ok(Box::new(DirFeedSource::new(location)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Portal(Catalog),
    Faq(Vec<FaqGroup>),
    Contributors(Vec<Contributor>),
}

pub async fn load_page(source: &dyn FeedSource, page: PageKind) -> Result<PageData, LoadError> {
    let document = page.feed_document();
    let bytes = source.fetch(document).await?;
    let data = match page {
        PageKind::Portal => PageData::Portal(Catalog::from_json(&bytes)?),
        PageKind::Faq => PageData::Faq(group_faqs(parse_document::<FaqEntry>(&bytes)?)),
        PageKind::Contributors => PageData::Contributors(parse_document(&bytes)?),
    };
    info!(
        location = %source.locate(document),
        ?page,
        "page data loaded"
    );
    Ok(data)
}

/// Parse a feed document that must be a JSON array of `T`.
pub fn parse_document<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    serde_json::from_slice(bytes).map_err(LoadError::malformed)
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
