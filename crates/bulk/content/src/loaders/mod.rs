//! Content loaders for reading inventory data from files.
//!
//! Each loader turns one RON/TOML file into the bulk-core type it describes;
//! [`ContentFactory`] ties them to a data directory layout.

pub mod config;
pub mod factory;
pub mod inventory;
pub mod stacks;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use inventory::InventoryLoader;
pub use stacks::{StackTableFile, StackTableLoader};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
