//! Content factory for loading inventory inputs from a data directory.

use std::path::{Path, PathBuf};

use bulk_core::{BulkConfig, ItemRecord, StackDefinitions};

use crate::loaders::{ConfigLoader, InventoryLoader, LoadResult, StackTableLoader};

/// Content factory that loads all Bulk inputs from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults when absent)
/// ├── stacks.toml      (optional, or stacks.ron; standard table when absent)
/// └── inventory.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load Bulk configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BulkConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(BulkConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the stack table from `stacks.toml`, falling back to `stacks.ron`.
    pub fn load_stack_definitions(&self) -> LoadResult<StackDefinitions> {
        for name in ["stacks.toml", "stacks.ron"] {
            let path = self.data_dir.join(name);
            if path.exists() {
                return StackTableLoader::load(&path);
            }
        }
        tracing::debug!(data_dir = %self.data_dir.display(), "no stack table, using standard table");
        Ok(StackDefinitions::default())
    }

    /// Load carried item records from `inventory.ron`.
    pub fn load_inventory(&self) -> LoadResult<Vec<ItemRecord>> {
        let path = self.data_dir.join("inventory.ron");
        InventoryLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
