//! Bulk configuration loader.

use std::path::Path;

use bulk_core::BulkConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BulkConfig`] from TOML files.
///
/// Missing keys fall back to their defaults, so an empty file is valid.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a Bulk configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BulkConfig
    pub fn load(path: &Path) -> LoadResult<BulkConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a Bulk configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<BulkConfig> {
        let config: BulkConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
