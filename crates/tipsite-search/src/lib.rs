//! tipsite Search Library
//!
//! Builds the flat JSON search index consumed by the site's client-side
//! search: one record (title, URL, keywords, excerpt) per page-data file.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use tipsite_core::Config;
//! use tipsite_search::IndexBuilder;
//!
//! let paths = Config::default().resolve(Path::new("."));
//! let report = IndexBuilder::new(paths).build().unwrap();
//! println!("{} pages indexed", report.index.len());
//! ```

pub mod indexer;
pub mod simple;

pub use indexer::{IndexBuilder, IndexReport, SkippedFile};
pub use simple::{SearchIndex, SearchRecord, excerpt, keywords, page_url};
use thiserror::Error;

/// Search-related errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
