//! Container-reference cycle detection.
//!
//! The aggregation walk assumes a cycle-free container graph. Hosts either
//! ask [`is_cycle`] before writing a container reference, or keep a
//! [`ContainerGraph`] that refuses cyclic assignments outright.

use std::collections::HashMap;

use super::record::{ItemId, ItemRecord};
use crate::error::{ErrorSeverity, InventoryError};

/// Errors from container reassignment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerError {
    /// Placing the item in the container would make it hold itself.
    #[error("putting item {item} into {container} would create a container cycle")]
    Cycle { item: ItemId, container: ItemId },

    #[error("item {0} not found")]
    UnknownItem(ItemId),

    #[error("container {0} not found")]
    UnknownContainer(ItemId),
}

impl InventoryError for ContainerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ContainerError::Cycle { .. } => "CONTAINER_CYCLE",
            ContainerError::UnknownItem(_) => "CONTAINER_UNKNOWN_ITEM",
            ContainerError::UnknownContainer(_) => "CONTAINER_UNKNOWN_CONTAINER",
        }
    }
}

/// Item → container references, checked for cycles on every assignment.
///
/// # Example
/// ```
/// # use bulk_core::{ContainerGraph, ItemId};
/// let mut graph = ContainerGraph::new();
/// graph.add_item("bag");
/// graph.add_item("box");
/// graph.assign_container(&ItemId::from("box"), Some(ItemId::from("bag"))).unwrap();
/// assert!(graph.assign_container(&ItemId::from("bag"), Some(ItemId::from("box"))).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerGraph {
    containers: HashMap<ItemId, Option<ItemId>>,
}

impl ContainerGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the references currently stored on `records`.
    ///
    /// References are copied as-is, including dangling or already cyclic ones;
    /// later assignments are still checked.
    pub fn from_records(records: &[ItemRecord]) -> Self {
        let mut containers = HashMap::with_capacity(records.len());
        for record in records {
            containers
                .entry(record.id.clone())
                .or_insert_with(|| record.container_id.clone());
        }
        Self { containers }
    }

    /// Registers a top-level item; existing items keep their container.
    pub fn add_item(&mut self, id: impl Into<ItemId>) {
        self.containers.entry(id.into()).or_insert(None);
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.containers.contains_key(id)
    }

    pub fn container_of(&self, id: &ItemId) -> Option<&ItemId> {
        self.containers.get(id).and_then(Option::as_ref)
    }

    /// Whether putting `item` into `container` would make `item` hold itself.
    ///
    /// Walks up from `container` through current references; O(depth).
    pub fn is_cycle(&self, item: &ItemId, container: &ItemId) -> bool {
        let mut current = Some(container);
        // Bounded so pre-existing loops elsewhere cannot spin forever.
        for _ in 0..=self.containers.len() {
            match current {
                Some(id) if id == item => return true,
                Some(id) => current = self.container_of(id),
                None => return false,
            }
        }
        false
    }

    /// Moves `item` into `container`, or to the top level with `None`.
    ///
    /// # Errors
    ///
    /// Unknown item or container ids, or an assignment that would form a cycle.
    /// The graph is unchanged on error.
    pub fn assign_container(
        &mut self,
        item: &ItemId,
        container: Option<ItemId>,
    ) -> Result<(), ContainerError> {
        if !self.contains(item) {
            return Err(ContainerError::UnknownItem(item.clone()));
        }
        if let Some(container) = &container {
            if !self.contains(container) {
                return Err(ContainerError::UnknownContainer(container.clone()));
            }
            if self.is_cycle(item, container) {
                tracing::debug!(%item, %container, "rejected cyclic container assignment");
                return Err(ContainerError::Cycle {
                    item: item.clone(),
                    container: container.clone(),
                });
            }
        }
        self.containers.insert(item.clone(), container);
        Ok(())
    }
}

/// Whether putting `item_id` into `container_id` would create a cycle given
/// the references currently stored on `records`.
///
/// O(n) in the number of records, since every call builds a
/// [`ContainerGraph`]. Keep a graph around for O(depth) checks of many moves
/// against the same records.
///
/// # Example
/// ```
/// # use bulk_core::{ItemRecord, is_cycle};
/// let records = vec![
///     ItemRecord::new("a"),
///     ItemRecord::new("b").in_container("a"),
/// ];
/// assert!(is_cycle("a", "b", &records));
/// assert!(!is_cycle("b", "a", &records));
/// ```
pub fn is_cycle(item_id: &str, container_id: &str, records: &[ItemRecord]) -> bool {
    let graph = ContainerGraph::from_records(records);
    graph.is_cycle(&ItemId::from(item_id), &ItemId::from(container_id))
}
