//! Data-driven inventory content and loaders.
//!
//! This crate reads the inputs of the Bulk engine from data files:
//! - Carried item records (data-driven via RON)
//! - Stack definition tables (RON or TOML)
//! - Bulk configuration (TOML)
//!
//! All loaders use bulk-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, InventoryLoader, LoadResult, StackTableFile, StackTableLoader,
};
