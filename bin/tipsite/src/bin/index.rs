//! tipsite-index
//!
//! Rebuilds `search-index.json` from every page-data file in the site.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the search index builder.
#[derive(Parser)]
#[command(
    name = "tipsite-index",
    version,
    about = "Build the site search index from all page-data files"
)]
struct Cli {
    /// Site root holding the data directory (defaults to the current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Path to configuration file (defaults to <root>/tipsite.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    tipsite::init_tracing(cli.verbose);

    let root = tipsite::site_root(cli.root.as_deref())?;
    tipsite::cmd::index::run(&root, cli.config.as_deref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["tipsite-index"]);

        assert!(cli.root.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_root_and_config() {
        let cli = Cli::parse_from(["tipsite-index", "-r", "site", "-c", "tips.toml", "-v"]);

        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, Some(PathBuf::from("tips.toml")));
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_rejects_positional() {
        assert!(Cli::try_parse_from(["tipsite-index", "examples"]).is_err());
    }
}
