//! Page-data directory scan.
//!
//! Reads every page-data file directly inside the data directory and builds
//! the search index from them. Files that fail to read or parse are skipped.

use std::path::{Path, PathBuf};

use tipsite_core::{PageData, SitePaths};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{Result, simple::SearchIndex};

/// A page-data file left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one scan.
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    pub index: SearchIndex,
    pub skipped: Vec<SkippedFile>,
}

/// Builds the search index for a site.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    paths: SitePaths,
}

impl IndexBuilder {
    pub fn new(paths: SitePaths) -> Self {
        Self { paths }
    }

    /// Page-data files directly inside the data directory, in directory
    /// order. Dotfiles count like any other file. A missing directory
    /// yields nothing.
    pub fn find_data_files(&self) -> Vec<PathBuf> {
        let dir = &self.paths.data_dir;
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "data directory does not exist");
            return Vec::new();
        }

        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "failed to read directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| self.paths.is_data_file(path))
            .collect()
    }

    /// Scan the data directory and build the index in memory.
    pub fn scan(&self) -> IndexReport {
        let files = self.find_data_files();
        info!(
            dir = %self.paths.data_dir.display(),
            count = files.len(),
            "found page-data files"
        );

        let mut report = IndexReport::default();
        for path in files {
            match PageData::read(&path) {
                Ok(page) => {
                    debug!(path = %path.display(), slug = ?page.slug(), "indexed page");
                    report.index.add_page(&page);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping page-data file");
                    report.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Scan and write the index file, replacing its previous content.
    pub fn build(&self) -> Result<IndexReport> {
        let report = self.scan();
        report.index.write_to_file(&self.paths.index_file)?;
        Ok(report)
    }

    /// Where [`IndexBuilder::build`] writes.
    pub fn index_file(&self) -> &Path {
        &self.paths.index_file
    }
}
