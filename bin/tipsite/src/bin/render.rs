//! tipsite-render
//!
//! Renders one page-data file into `<slug>.html` and refreshes the search
//! index.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use color_eyre::eyre::Result;

/// Exit code for command-line usage errors.
const USAGE_EXIT: u8 = 2;

/// Command-line interface for the page renderer.
#[derive(Parser)]
#[command(
    name = "tipsite-render",
    version,
    about = "Render a page-data file into an HTML page"
)]
struct Cli {
    /// Page-data file to render
    data_file: PathBuf,

    /// Site root holding the template (defaults to the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Path to configuration file (defaults to <root>/tipsite.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not rebuild the search index afterwards
    #[arg(long)]
    no_index: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            println!("{}", e.render());
            return Ok(ExitCode::from(USAGE_EXIT));
        }
        Err(e) => e.exit(),
    };
    tipsite::init_tracing(cli.verbose);

    let root = tipsite::site_root(cli.root.as_deref())?;
    let outcome = tipsite::cmd::render::run(
        &root,
        cli.config.as_deref(),
        &cli.data_file,
        !cli.no_index,
    )?;

    Ok(outcome.exit_code())
}
