//! Per-item container metadata consumed by inventory sheets.

use std::collections::HashMap;

use super::index::ContainerIndex;
use super::record::{ItemId, ItemRecord};
use super::tree::{build_forest, nodes_by_record};
use crate::bulk::{
    Bulk, BulkItem, LIGHT_PER_NORMAL, Size, StackDefinitions, calculate_bulk, format_bulk,
    weight_to_bulk,
};
use crate::config::BulkConfig;
use crate::error::BulkResult;

/// Container view of one item: what it holds and how full it is.
///
/// Recomputed from the flat record list on every query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerData<'a> {
    pub item: &'a ItemRecord,
    pub held_items: Vec<&'a ItemRecord>,
    pub negate_bulk: Bulk,
    pub capacity: Bulk,
    pub held_item_bulk: Bulk,
    pub is_in_container: bool,
    pub formatted_negate_bulk: String,
    pub formatted_held_item_bulk: String,
    pub formatted_capacity: String,
}

impl ContainerData<'_> {
    /// Capacity in light Bulk that held items are measured against.
    ///
    /// Light items do not count against a container with whole-Bulk capacity,
    /// so such containers get one Bulk of slack.
    pub fn light_bulk_capacity_threshold(&self) -> u32 {
        if self.capacity.normal() > 0 {
            self.capacity.to_light_bulk().saturating_add(LIGHT_PER_NORMAL)
        } else {
            self.capacity.light()
        }
    }

    /// Held Bulk as a floored percentage of the threshold; 0 without capacity.
    pub fn full_percentage(&self) -> u32 {
        let threshold = u64::from(self.light_bulk_capacity_threshold());
        if threshold == 0 {
            return 0;
        }
        let held = u64::from(self.held_item_bulk.to_light_bulk());
        u32::try_from(held * 100 / threshold).unwrap_or(u32::MAX)
    }

    pub fn full_percentage_max_100(&self) -> u32 {
        self.full_percentage().min(100)
    }

    pub fn is_overloaded(&self) -> bool {
        let held = self.held_item_bulk.to_light_bulk();
        let threshold = self.light_bulk_capacity_threshold();
        if self.capacity.normal() > 0 {
            held >= threshold
        } else {
            held > threshold
        }
    }

    pub fn is_container(&self) -> bool {
        self.capacity.is_positive()
    }
}

/// Builds container metadata for every record, keyed by item id.
///
/// Held-item Bulk is the aggregated Bulk of everything directly inside the
/// item (and, through them, everything nested deeper), computed as if those
/// items were an inventory of their own.
///
/// # Errors
///
/// [`crate::BulkError::UnknownStackGroup`] if a held item names a stack group
/// missing from `definitions`.
pub fn get_container_map<'a>(
    records: &'a [ItemRecord],
    definitions: &StackDefinitions,
    config: &BulkConfig,
    actor_size: Size,
) -> BulkResult<HashMap<ItemId, ContainerData<'a>>> {
    let index = ContainerIndex::new(records);
    let roots = build_forest(&index);
    let nodes = nodes_by_record(&index, &roots);
    let mut containers = HashMap::with_capacity(records.len());

    for (position, item) in records.iter().enumerate() {
        let held_items = index
            .held_by(position)
            .iter()
            .map(|&held| index.record(held))
            .collect();
        let held_nodes: &[BulkItem] = nodes
            .get(&position)
            .map(|node| node.holds_items.as_slice())
            .unwrap_or_default();
        let (held_item_bulk, _) = calculate_bulk(held_nodes, definitions, config, actor_size)?;

        let negate_bulk = parse_or_negligible(item, "negate_bulk", item.negate_bulk.as_deref());
        let capacity = parse_or_negligible(item, "capacity", item.capacity.as_deref());

        containers.entry(item.id.clone()).or_insert(ContainerData {
            item,
            held_items,
            negate_bulk,
            capacity,
            held_item_bulk,
            is_in_container: index.is_in_container(position),
            formatted_negate_bulk: format_bulk(negate_bulk),
            formatted_held_item_bulk: format_bulk(held_item_bulk),
            formatted_capacity: format_bulk(capacity),
        });
    }

    tracing::debug!(items = records.len(), "built container map");
    Ok(containers)
}

fn parse_or_negligible(item: &ItemRecord, field: &str, value: Option<&str>) -> Bulk {
    weight_to_bulk(value).unwrap_or_else(|| {
        if let Some(value) = value {
            tracing::warn!(item = %item.id, field, value, "unparseable bulk value");
        }
        Bulk::NEGLIGIBLE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_map(records: &[ItemRecord]) -> HashMap<ItemId, ContainerData<'_>> {
        get_container_map(
            records,
            &StackDefinitions::default(),
            &BulkConfig::default(),
            Size::Medium,
        )
        .unwrap()
    }

    fn backpack_with(contents: &str) -> Vec<ItemRecord> {
        vec![
            ItemRecord::new("backpack")
                .with_weight("L")
                .with_capacity("4")
                .with_negate_bulk("2"),
            ItemRecord::new("contents")
                .with_weight(contents)
                .in_container("backpack"),
        ]
    }

    #[test]
    fn collects_held_items_and_bulk() {
        let records = backpack_with("2; 5L");
        let map = container_map(&records);
        let backpack = &map[&ItemId::from("backpack")];
        assert_eq!(backpack.held_items.len(), 1);
        assert_eq!(backpack.held_item_bulk, Bulk::new(2, 5));
        assert_eq!(backpack.capacity, Bulk::from_normal(4));
        assert_eq!(backpack.formatted_capacity, "4");
        assert_eq!(backpack.formatted_negate_bulk, "2");
        assert_eq!(backpack.formatted_held_item_bulk, "2; 5L");
        assert!(!backpack.is_in_container);
        assert!(backpack.is_container());

        let contents = &map[&ItemId::from("contents")];
        assert!(contents.is_in_container);
        assert!(contents.held_items.is_empty());
        assert_eq!(contents.formatted_held_item_bulk, "-");
    }

    #[test]
    fn whole_bulk_capacity_gets_one_bulk_of_slack() {
        let records = backpack_with("2; 5L");
        let map = container_map(&records);
        let backpack = &map[&ItemId::from("backpack")];
        // 25 light held against 40 + 10
        assert_eq!(backpack.light_bulk_capacity_threshold(), 50);
        assert_eq!(backpack.full_percentage(), 50);
        assert!(!backpack.is_overloaded());
    }

    #[test]
    fn overloaded_at_threshold_for_whole_bulk_capacity() {
        let records = backpack_with("5");
        let map = container_map(&records);
        let backpack = &map[&ItemId::from("backpack")];
        assert_eq!(backpack.full_percentage(), 100);
        assert!(backpack.is_overloaded());

        let records = backpack_with("6");
        let map = container_map(&records);
        let backpack = &map[&ItemId::from("backpack")];
        assert_eq!(backpack.full_percentage(), 120);
        assert_eq!(backpack.full_percentage_max_100(), 100);
    }

    #[test]
    fn light_capacity_overloads_strictly_above() {
        let records = vec![
            ItemRecord::new("pouch").with_capacity("2L"),
            ItemRecord::new("gem").with_weight("L").in_container("pouch"),
            ItemRecord::new("ring").with_weight("L").in_container("pouch"),
        ];
        let map = container_map(&records);
        let pouch = &map[&ItemId::from("pouch")];
        assert_eq!(pouch.light_bulk_capacity_threshold(), 2);
        assert_eq!(pouch.full_percentage(), 100);
        assert!(!pouch.is_overloaded());
    }

    #[test]
    fn no_capacity_means_zero_percent() {
        let records = vec![ItemRecord::new("sword").with_weight("1")];
        let map = container_map(&records);
        let sword = &map[&ItemId::from("sword")];
        assert_eq!(sword.full_percentage(), 0);
        assert!(!sword.is_overloaded());
        assert!(!sword.is_container());
    }

    #[test]
    fn held_bulk_includes_nested_contents() {
        let records = vec![
            ItemRecord::new("chest").with_capacity("8"),
            ItemRecord::new("bag of holding")
                .with_weight("1")
                .with_negate_bulk("25")
                .extradimensional(true)
                .in_container("chest"),
            ItemRecord::new("anvil")
                .with_weight("30")
                .in_container("bag of holding"),
        ];
        let map = container_map(&records);
        assert_eq!(
            map[&ItemId::from("bag of holding")].held_item_bulk,
            Bulk::from_normal(30)
        );
        assert_eq!(map[&ItemId::from("chest")].held_item_bulk, Bulk::from_normal(6));
    }

    #[test]
    fn deep_container_chain_is_indexed() {
        let depth = 3_000;
        let mut records = vec![ItemRecord::new("box 0").with_capacity("1")];
        for level in 1..depth {
            records.push(
                ItemRecord::new(format!("box {level}"))
                    .with_capacity("1")
                    .in_container(format!("box {}", level - 1)),
            );
        }
        records.push(
            ItemRecord::new("gem")
                .with_weight("L")
                .in_container(format!("box {}", depth - 1)),
        );

        let map = container_map(&records);
        assert_eq!(map.len(), depth + 1);
        assert_eq!(map[&ItemId::from("box 0")].held_item_bulk, Bulk::LIGHT);
        assert_eq!(map[&ItemId::from("box 2999")].held_items.len(), 1);
    }

    #[test]
    fn unparseable_capacity_is_negligible() {
        let records = vec![ItemRecord::new("sack").with_capacity("lots")];
        let map = container_map(&records);
        assert_eq!(map[&ItemId::from("sack")].capacity, Bulk::NEGLIGIBLE);
    }
}
