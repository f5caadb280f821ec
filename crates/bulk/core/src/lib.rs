//! Deterministic inventory Bulk and container-capacity rules.
//!
//! `bulk-core` turns a flat list of carried item records into normalized Bulk
//! values, per-container fullness, and encumbrance thresholds. Every entry point
//! is a pure function over its arguments: the stack table and [`BulkConfig`] are
//! passed explicitly and nothing is cached between calls.
//!
//! Typical flow: [`to_bulk_items`] builds the item tree, [`calculate_bulk`]
//! totals it, [`calculate_encumbrance`] compares the total against the carrier,
//! and [`get_container_map`] reports how full each container is.
pub mod bulk;
pub mod config;
pub mod encumbrance;
pub mod error;
pub mod inventory;
pub use bulk::{
    Bulk, BulkItem, COINS, LIGHT_PER_NORMAL, LegacyWeight, Size, StackDefinition,
    StackDefinitions, StackGroupOverflow, bulk_to_weight_string, calculate_bulk,
    calculate_carried_armor_bulk, calculate_combined_bulk, calculate_stack_bulk,
    convert_bulk_to_size, fix_weight, format_bulk, parse_weight, weight_to_bulk,
};
pub use config::BulkConfig;
pub use encumbrance::{Encumbrance, calculate_encumbrance};
pub use error::{BulkError, BulkResult, ErrorSeverity, InventoryError};
pub use inventory::{
    ContainerData, ContainerError, ContainerGraph, ItemId, ItemRecord, get_container_map,
    is_cycle, to_bulk_items,
};
