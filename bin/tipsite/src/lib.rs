//! tipsite CLI Library
//!
//! Shared plumbing for the two tipsite binaries:
//!
//! - `tipsite-render` renders one page-data file and then rebuilds the
//!   search index through `tipsite-index`.
//! - `tipsite-index` scans the page-data directory and writes the search
//!   index.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (render, index)

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;

/// Initialize tracing with the specified verbosity level.
///
/// Events go to stderr; stdout is reserved for the user-facing messages.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// The site root: `root` if given, otherwise the current directory.
pub fn site_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => std::env::current_dir().wrap_err("Failed to determine current directory"),
    }
}
