//! Flat JSON search index.
//!
//! One record per page, serialized as a single top-level array that the
//! site's client-side search loads in full.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tipsite_core::PageData;
use tracing::info;

use crate::{Result, SearchError};

/// One search index entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Page title, empty when the page has none.
    pub title: String,

    /// `<slug>.html`, or empty when the page has no slug.
    pub url: String,

    /// Title and slug tokens, first occurrence order.
    pub keywords: Vec<String>,

    /// First intro paragraph, else first body paragraph.
    pub excerpt: String,
}

impl SearchRecord {
    /// Summarize one page.
    pub fn from_page(page: &PageData) -> Self {
        let title = page.title.clone().unwrap_or_default();
        let slug = page.slug.as_deref().unwrap_or_default();

        Self {
            keywords: keywords(&title, slug),
            url: page_url(slug),
            excerpt: excerpt(page).to_string(),
            title,
        }
    }
}

/// The whole search index, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    pub records: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's record.
    pub fn add_page(&mut self, page: &PageData) {
        self.records.push(SearchRecord::from_page(page));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the index to pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Deserialize an index from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Write the index to `path`, replacing any previous content.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| SearchError::Io(e.to_string()))?;

        info!(records = self.records.len(), path = %path.display(), "wrote search index");
        Ok(())
    }
}

/// `<slug>.html`, or empty for an empty slug.
pub fn page_url(slug: &str) -> String {
    if slug.is_empty() {
        String::new()
    } else {
        format!("{slug}.html")
    }
}

/// Keywords for a page: lowercased title words (hyphens count as spaces)
/// followed by the slug's hyphen-separated parts, duplicates dropped.
///
/// Slug parts are taken as-is, so a doubled hyphen yields an empty keyword.
pub fn keywords(title: &str, slug: &str) -> Vec<String> {
    let title_terms = title
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

    let slug_terms = (!slug.is_empty())
        .then(|| slug.split('-').map(str::to_string))
        .into_iter()
        .flatten();

    let mut terms: Vec<String> = Vec::new();
    for term in title_terms.into_iter().chain(slug_terms) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// First intro paragraph, else first body paragraph, else empty.
pub fn excerpt(page: &PageData) -> &str {
    page.intro
        .first()
        .or_else(|| page.body.first())
        .map(String::as_str)
        .unwrap_or_default()
}
