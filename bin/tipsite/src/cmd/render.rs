//! Render command - writes one page and refreshes the search index

use std::{
    path::{Path, PathBuf},
    process::{Command, ExitCode},
};

use color_eyre::eyre::{Result, WrapErr, bail};
use tipsite_core::Config;
use tipsite_generator::{PageRenderer, RenderError, RenderedPage};

/// Name of the index builder executable.
pub const INDEX_BIN: &str = "tipsite-index";

/// What happened to the search index after a page was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexRebuild {
    Rebuilt,
    Skipped,
    Failed(String),
}

/// Result of a render run that did not hit an unexpected error.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The page was written; the index rebuild never affects success.
    Written {
        page: RenderedPage,
        index: IndexRebuild,
    },
    /// A reported, fatal input problem (missing file, slug or template).
    Failed(RenderError),
}

impl RenderOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Written { .. } => ExitCode::SUCCESS,
            Self::Failed(_) => ExitCode::FAILURE,
        }
    }
}

/// Run the render command.
///
/// Renders `data_file` into `<slug>.html` beside the template, then runs
/// the index builder unless `rebuild_index` is false.
pub fn run(
    root: &Path,
    config_path: Option<&Path>,
    data_file: &Path,
    rebuild_index: bool,
) -> Result<RenderOutcome> {
    tracing::info!(?root, ?config_path, ?data_file, rebuild_index, "Rendering page");

    let config = Config::discover(root, config_path).wrap_err("Failed to load configuration")?;
    let paths = config.resolve(root);
    let index_name = paths
        .index_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renderer = PageRenderer::new(paths);

    let page = match renderer.render_file(data_file) {
        Ok(page) => page,
        Err(RenderError::Io(e)) => {
            return Err(e).wrap_err_with(|| format!("Failed to render {}", data_file.display()));
        }
        Err(e) => {
            println!("{e}");
            tracing::error!(error = %e, "Render failed");
            return Ok(RenderOutcome::Failed(e));
        }
    };
    println!("Wrote {}", page.output.display());

    let index = if rebuild_index {
        match run_index_builder(root, config_path) {
            Ok(()) => {
                println!("Rebuilt {index_name}");
                IndexRebuild::Rebuilt
            }
            Err(e) => {
                println!("Warning: failed to rebuild search index: {e}");
                tracing::warn!(error = %e, "Search index rebuild failed");
                IndexRebuild::Failed(e.to_string())
            }
        }
    } else {
        tracing::debug!("Skipping search index rebuild");
        IndexRebuild::Skipped
    };

    Ok(RenderOutcome::Written { page, index })
}

/// Find the index builder: next to the running executable first, then on
/// `PATH`.
pub fn locate_index_builder() -> Option<PathBuf> {
    let name = format!("{INDEX_BIN}{}", std::env::consts::EXE_SUFFIX);

    let sibling = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)));

    sibling.filter(|path| is_executable(path)).or_else(|| {
        std::env::var_os("PATH").and_then(|paths| {
            std::env::split_paths(&paths)
                .map(|dir| dir.join(&name))
                .find(|path| is_executable(path))
        })
    })
}

/// A regular file the current user may run.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run the index builder for the same site and wait for it.
fn run_index_builder(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let Some(program) = locate_index_builder() else {
        bail!("{INDEX_BIN} executable not found");
    };

    let mut cmd = Command::new(&program);
    cmd.arg("--root").arg(root);
    if let Some(config) = config_path {
        cmd.arg("--config").arg(config);
    }

    tracing::debug!(?cmd, "Running index builder");
    let status = cmd
        .status()
        .wrap_err_with(|| format!("Failed to start {}", program.display()))?;

    if !status.success() {
        bail!("{} exited with {status}", program.display());
    }

    Ok(())
}
