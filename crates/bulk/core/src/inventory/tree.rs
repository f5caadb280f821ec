//! Builds owned [`BulkItem`] trees from flat item records.

use std::collections::HashMap;

use super::index::ContainerIndex;
use super::record::ItemRecord;
use crate::bulk::BulkItem;

/// Converts flat records into the top-level items of the inventory, each
/// owning whatever it holds.
///
/// Records whose container reference names an existing record are nested under
/// it; all others are top-level. Records caught in a reference loop are
/// unreachable from the top level and are left out.
///
/// # Example
/// ```
/// # use bulk_core::{ItemRecord, to_bulk_items};
/// let records = vec![
///     ItemRecord::new("pack").with_weight("1"),
///     ItemRecord::new("rope").with_weight("L").in_container("pack"),
/// ];
/// let items = to_bulk_items(&records);
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].holds_items.len(), 1);
/// ```
pub fn to_bulk_items(records: &[ItemRecord]) -> Vec<BulkItem> {
    build_forest(&ContainerIndex::new(records))
}

pub(crate) fn build_forest(index: &ContainerIndex<'_>) -> Vec<BulkItem> {
    let total = index.records().len();
    let mut built: Vec<Option<BulkItem>> = (0..total).map(|_| None).collect();
    let mut pending: Vec<(usize, bool)> = index
        .top_level()
        .iter()
        .rev()
        .map(|&record| (record, false))
        .collect();
    let mut reached = 0;

    // Post-order: children are built before the record that holds them.
    while let Some((record, children_built)) = pending.pop() {
        if children_built {
            let children = index
                .held_by(record)
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[record] = Some(index.record(record).to_bulk_item(children));
        } else {
            reached += 1;
            pending.push((record, true));
            pending.extend(index.held_by(record).iter().rev().map(|&child| (child, false)));
        }
    }

    if reached < total {
        tracing::warn!(
            unreachable = total - reached,
            "items excluded from bulk: container references form a loop"
        );
    }

    index
        .top_level()
        .iter()
        .filter_map(|&record| built[record].take())
        .collect()
}

/// Maps record positions to their node in a forest built from `index`.
pub(crate) fn nodes_by_record<'t>(
    index: &ContainerIndex<'_>,
    roots: &'t [BulkItem],
) -> HashMap<usize, &'t BulkItem> {
    let mut nodes = HashMap::with_capacity(index.records().len());
    let mut pending: Vec<(usize, &'t BulkItem)> =
        index.top_level().iter().copied().zip(roots).collect();

    while let Some((record, node)) = pending.pop() {
        nodes.insert(record, node);
        pending.extend(index.held_by(record).iter().copied().zip(&node.holds_items));
    }
    nodes
}
