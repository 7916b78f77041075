//! tipsite Core Library
//!
//! Page data model, site configuration, and error handling shared by the
//! page renderer and the search index builder.

pub mod config;
pub mod error;
pub mod page;

pub use config::{Config, SitePaths};
pub use error::{CoreError, Result};
pub use page::{PageData, Step};
