//! Page data, the structured input describing one page.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, Result};

/// Title used by the renderer when the page data has none.
pub const UNTITLED: &str = "Untitled";

/// Page data read from a single data file.
///
/// Every field is optional on disk; `null` is treated the same as a missing
/// field. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// Output filename stem and index URL stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form display date, inserted verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Hero image path, resolved through the placeholder table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,

    /// Intro paragraphs.
    #[serde(default, deserialize_with = "nullable")]
    pub intro: Vec<String>,

    /// Ordered how-to steps.
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<Step>,

    /// Body paragraphs.
    #[serde(default, deserialize_with = "nullable")]
    pub body: Vec<String>,
}

/// A single step of a how-to page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
}

impl Step {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PageData {
    /// Parse page data from a JSON string. `path` is only used for errors.
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::parse(path, e.to_string()))
    }

    /// Read and parse a page-data file.
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, path)
    }

    /// The slug, if present and non-empty.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|slug| !slug.is_empty())
    }

    /// The title as the renderer shows it: missing becomes [`UNTITLED`],
    /// an explicitly empty title stays empty.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// The image path, empty when absent.
    pub fn image_path(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}
