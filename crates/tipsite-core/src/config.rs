//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Name of the configuration file looked up in the site root.
pub const CONFIG_FILE: &str = "tipsite.toml";

/// Main configuration structure for tipsite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locations of the template, page data and search index.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// File locations, relative to the site root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Shared page template.
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Directory holding the page-data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Search index output file.
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,

    /// Extension (without dot) of page-data files.
    #[serde(default = "default_data_extension")]
    pub data_extension: String,
}

fn default_template() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("examples")
}

fn default_index_file() -> PathBuf {
    PathBuf::from("search-index.json")
}

fn default_data_extension() -> String {
    "json".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            data_dir: default_data_dir(),
            index_file: default_index_file(),
            data_extension: default_data_extension(),
        }
    }
}

/// Configuration paths resolved against a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub template: PathBuf,
    pub data_dir: PathBuf,
    pub index_file: PathBuf,
    pub data_extension: String,
}

impl SitePaths {
    /// Directory that rendered pages are written to (the template's directory).
    pub fn output_dir(&self) -> &Path {
        self.template.parent().unwrap_or(self.root.as_path())
    }

    /// Whether the file name ends in `.<data_extension>`. A bare `.json`
    /// counts, as it does for a `*.json` glob.
    pub fn is_data_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(self.data_extension.as_str()))
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

impl Config {
    /// Load configuration with `TIPSITE__*` environment overrides.
    ///
    /// When `required` is false a missing file is not an error and the
    /// defaults (plus environment) apply.
    pub fn load_with_env(path: &Path, required: bool) -> Result<Self> {
        if required && !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(config::Environment::with_prefix("TIPSITE").separator("__"))
            .build()
            .map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to load config file: {}", path.display()),
                    e,
                )
            })?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration for a site root.
    ///
    /// An explicit path must exist; otherwise `<root>/tipsite.toml` is used
    /// if present.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load_with_env(path, true)
            }
            None => {
                let path = root.join(CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!(root = %root.display(), "no site configuration, using defaults");
                }
                Self::load_with_env(&path, false)
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        let paths = &self.paths;
        for (name, value) in [
            ("paths.template", &paths.template),
            ("paths.data_dir", &paths.data_dir),
            ("paths.index_file", &paths.index_file),
        ] {
            if value.as_os_str().is_empty() {
                return Err(CoreError::config(format!("{name} cannot be empty")));
            }
        }

        if paths.data_extension.is_empty() {
            return Err(CoreError::config("paths.data_extension cannot be empty"));
        }

        if paths.data_extension.starts_with('.') {
            return Err(CoreError::config(
                "paths.data_extension must not start with a dot",
            ));
        }

        Ok(())
    }

    /// Resolve all configured paths against `root`.
    pub fn resolve(&self, root: &Path) -> SitePaths {
        SitePaths {
            root: root.to_path_buf(),
            template: root.join(&self.paths.template),
            data_dir: root.join(&self.paths.data_dir),
            index_file: root.join(&self.paths.index_file),
            data_extension: self.paths.data_extension.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            r#"
[paths]
template = "layout/page.html"
data_dir = "pages"
index_file = "public/search.json"
data_extension = "page"
"#,
        )
        .expect("write");

        let config = Config::load_with_env(&config_path, true).expect("load config");

        assert_eq!(config.paths.template, PathBuf::from("layout/page.html"));
        assert_eq!(config.paths.data_dir, PathBuf::from("pages"));
        assert_eq!(config.paths.index_file, PathBuf::from("public/search.json"));
        assert_eq!(config.paths.data_extension, "page");
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load_with_env(&config_path, true).expect("load config");
        assert_eq!(config, Config::default());
        assert_eq!(config.paths.data_dir, PathBuf::from("examples"));
        assert_eq!(config.paths.index_file, PathBuf::from("search-index.json"));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::discover(dir.path(), None).expect("discover");
        assert_eq!(config.paths.template, PathBuf::from("template.html"));
        assert_eq!(config.paths.data_extension, "json");
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("other.toml");
        let result = Config::discover(dir.path(), Some(&missing));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_discover_reads_site_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[paths]\ndata_dir = \"content\"\n",
        )
        .expect("write");

        let config = Config::discover(dir.path(), None).expect("discover");
        assert_eq!(config.paths.data_dir, PathBuf::from("content"));
        assert_eq!(config.paths.template, PathBuf::from("template.html"));
    }

    #[test]
    fn test_config_validation_dotted_extension() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[paths]\ndata_extension = \".json\"\n").expect("write");

        let result = Config::load_with_env(&config_path, true);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("must not start with a dot")
        );
    }

    #[test]
    fn test_config_validation_empty_data_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[paths]\ndata_dir = \"\"\n").expect("write");

        let result = Config::load_with_env(&config_path, true);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("paths.data_dir cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load_with_env(Path::new("/nonexistent/tipsite.toml"), true);
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_paths() {
        let paths = Config::default().resolve(Path::new("/srv/site"));

        assert_eq!(paths.template, PathBuf::from("/srv/site/template.html"));
        assert_eq!(paths.data_dir, PathBuf::from("/srv/site/examples"));
        assert_eq!(paths.index_file, PathBuf::from("/srv/site/search-index.json"));
        assert_eq!(paths.output_dir(), Path::new("/srv/site"));
        assert!(paths.is_data_file(Path::new("examples/a.json")));
        assert!(!paths.is_data_file(Path::new("examples/a.txt")));
        assert!(!paths.is_data_file(Path::new("examples/json")));
        assert!(!paths.is_data_file(Path::new("examples/a.xjson")));
        assert!(paths.is_data_file(Path::new("examples/.json")));
        assert!(paths.is_data_file(Path::new("examples/.draft.json")));
    }
}
