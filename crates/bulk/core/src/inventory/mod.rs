//! Flat item records and the views built from them.
//!
//! Hosts store items as a flat list where each record may name the item
//! holding it. This module turns that list into [`BulkItem`](crate::BulkItem)
//! trees, per-container metadata, and guards against container cycles.

mod index;

pub mod container;
pub mod cycle;
pub mod record;
pub mod tree;

pub use container::{ContainerData, get_container_map};
pub use cycle::{ContainerError, ContainerGraph, is_cycle};
pub use record::{ItemId, ItemRecord};
pub use tree::to_bulk_items;
