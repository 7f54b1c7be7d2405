//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bazaar_commerce::dataset::{Dataset, seed};
use tracing::debug;

use crate::config::{CONFIG_FILE_NAMES, CliConfig};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load configuration from `config_path`, or the nearest config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    fn load_in(cwd: PathBuf, config_path: Option<&Path>, output: Output) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .or_else(|| find_config(&cwd));
        let config = match &config_path {
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Load the configured catalog, or the built-in seed catalog.
    ///
    /// `config` commands never call this.
    pub fn dataset(&self) -> Result<Dataset> {
        match &self.config.catalog.path {
            Some(path) => load_catalog(&resolve_path(&self.cwd, path)),
            None => seed::storefront().context("Failed to build the seed catalog"),
        }
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

fn load_catalog(path: &Path) -> Result<Dataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    Dataset::from_json(&json).with_context(|| format!("Invalid catalog: {}", path.display()))
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("bazaar.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join("bazaar.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("bazaar.toml"), "").unwrap();
        std::fs::write(nested.join(".bazaar.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join(".bazaar.toml")));
    }

    #[test]
    fn test_missing_catalog_does_not_block_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bazaar.toml"),
            "[catalog]\npath = \"missing.json\"\n",
        )
        .unwrap();

        let ctx = Context::load_in(dir.path().to_path_buf(), None, Output::new(true)).unwrap();
        assert_eq!(ctx.config.catalog.path, Some(PathBuf::from("missing.json")));
        assert_eq!(ctx.config_path, Some(dir.path().join("bazaar.toml")));

        let err = ctx.dataset().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read catalog"));
    }

    #[test]
    fn test_seed_catalog_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_in(dir.path().to_path_buf(), None, Output::new(true)).unwrap();
        assert_eq!(ctx.dataset().unwrap().products().len(), 4);
    }

    #[test]
    fn test_load_catalog_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let snapshot = seed::storefront().unwrap().to_snapshot();
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let dataset = load_catalog(&path).unwrap();
        assert_eq!(dataset.products().len(), 4);
    }

    #[test]
    fn test_load_catalog_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid catalog"));
    }
}
