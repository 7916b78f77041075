//! Index command - rebuilds the search index from all page data

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tipsite_core::Config;
use tipsite_search::{IndexBuilder, IndexReport};

/// Run the index command.
///
/// Scans the site's data directory and rewrites the search index file.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<IndexReport> {
    tracing::info!(?root, ?config_path, "Building search index");

    let config = Config::discover(root, config_path).wrap_err("Failed to load configuration")?;
    let builder = IndexBuilder::new(config.resolve(root));

    let report = builder
        .build()
        .wrap_err("Failed to write search index")?;

    for skipped in &report.skipped {
        println!("Skipping {}: {}", skipped.path.display(), skipped.reason);
    }
    println!("Wrote {}", builder.index_file().display());

    tracing::info!(
        records = report.index.len(),
        skipped = report.skipped.len(),
        "Search index built"
    );

    Ok(report)
}
