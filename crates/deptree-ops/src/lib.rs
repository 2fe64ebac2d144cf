pub mod ops_check;
pub mod ops_json;
pub mod ops_tree;
pub mod ops_why;

use std::path::{Path, PathBuf};

use deptree_core::config::GlobalConfig;
use deptree_resolver::index::{PackageIndex, INDEX_FILE_NAME};
use deptree_resolver::resolver::IndexResolver;
use deptree_util::errors::DeptreeError;

/// Load the global config, falling back to defaults if it cannot be read.
pub fn load_config() -> GlobalConfig {
    match GlobalConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load global config, using defaults: {e}");
            GlobalConfig::default()
        }
    }
}

/// Decide which index file to use.
///
/// An explicit path wins, then `[index] path` from the config, then the
/// nearest `Deptree.toml` found walking up from `cwd`.
pub fn locate_index(
    explicit: Option<&Path>,
    config: &GlobalConfig,
    cwd: &Path,
) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.index.path {
        return Ok(path.clone());
    }
    deptree_util::fs::find_file_upwards(cwd, INDEX_FILE_NAME).ok_or_else(|| {
        DeptreeError::Index {
            message: format!(
                "Could not find {INDEX_FILE_NAME} in {} or any parent directory",
                cwd.display()
            ),
        }
        .into()
    })
}

/// Build an [`IndexResolver`] from the located index file.
pub fn index_resolver(
    explicit: Option<&Path>,
    config: &GlobalConfig,
    cwd: &Path,
) -> miette::Result<IndexResolver> {
    let path = locate_index(explicit, config, cwd)?;
    tracing::debug!("Using package index {}", path.display());
    let index = PackageIndex::from_path(&path)?;
    Ok(IndexResolver::new(index))
}
