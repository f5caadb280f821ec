//! Tree node describing one carried item for Bulk aggregation.

use super::size::Size;
use super::value::Bulk;
use crate::inventory::ItemId;

/// One carried item and everything it holds.
///
/// A node owns its children exclusively. Stacked items (those with a
/// `stack_group`) derive their Bulk from stack math and ignore `bulk`.
///
/// # Example
/// ```
/// # use bulk_core::{Bulk, BulkItem};
/// let quiver = BulkItem::new()
///     .with_bulk(Bulk::LIGHT)
///     .holding(vec![BulkItem::stacked("arrows", 20)]);
/// assert_eq!(quiver.holds_items.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkItem {
    pub id: Option<ItemId>,
    pub bulk: Bulk,
    /// Overrides `bulk` while equipped.
    pub equipped_bulk: Option<Bulk>,
    /// Overrides `bulk` while not equipped.
    pub unequipped_bulk: Option<Bulk>,
    pub quantity: u32,
    pub stack_group: Option<String>,
    pub is_equipped: bool,
    pub extradimensional_container: bool,
    /// Bulk subtracted from held items while this container is active.
    pub negate_bulk: Bulk,
    pub size: Size,
    pub holds_items: Vec<BulkItem>,
}

impl Default for BulkItem {
    fn default() -> Self {
        Self {
            id: None,
            bulk: Bulk::NEGLIGIBLE,
            equipped_bulk: None,
            unequipped_bulk: None,
            quantity: 1,
            stack_group: None,
            is_equipped: false,
            extradimensional_container: false,
            negate_bulk: Bulk::NEGLIGIBLE,
            size: Size::Medium,
            holds_items: Vec::new(),
        }
    }
}

impl BulkItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack-group item such as a bundle of arrows or a coin pouch.
    pub fn stacked(group: impl Into<String>, quantity: u32) -> Self {
        Self::new().with_stack_group(group).with_quantity(quantity)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_bulk(mut self, bulk: Bulk) -> Self {
        self.bulk = bulk;
        self
    }

    #[must_use]
    pub fn with_stack_group(mut self, group: impl Into<String>) -> Self {
        self.stack_group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_negate_bulk(mut self, negate_bulk: Bulk) -> Self {
        self.negate_bulk = negate_bulk;
        self
    }

    #[must_use]
    pub fn equipped(mut self, is_equipped: bool) -> Self {
        self.is_equipped = is_equipped;
        self
    }

    #[must_use]
    pub fn with_equipped_bulk(mut self, bulk: Bulk) -> Self {
        self.equipped_bulk = Some(bulk);
        self
    }

    #[must_use]
    pub fn with_unequipped_bulk(mut self, bulk: Bulk) -> Self {
        self.unequipped_bulk = Some(bulk);
        self
    }

    #[must_use]
    pub fn extradimensional(mut self, extradimensional: bool) -> Self {
        self.extradimensional_container = extradimensional;
        self
    }

    #[must_use]
    pub fn holding(mut self, items: Vec<BulkItem>) -> Self {
        self.holds_items = items;
        self
    }

    /// Bulk of a single unit, honoring the equipped/unequipped overrides.
    pub fn unit_bulk(&self) -> Bulk {
        let override_bulk = if self.is_equipped {
            self.equipped_bulk
        } else {
            self.unequipped_bulk
        };
        override_bulk.unwrap_or(self.bulk)
    }
}

impl Drop for BulkItem {
    // Unlinks held items one level at a time so dropping a deep chain
    // never recurses.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.holds_items);
        while let Some(mut item) = pending.pop() {
            pending.append(&mut item.holds_items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_follow_equipped_state() {
        let armor = BulkItem::new()
            .with_bulk(Bulk::from_normal(2))
            .with_equipped_bulk(Bulk::ONE)
            .with_unequipped_bulk(Bulk::from_normal(3));
        assert_eq!(armor.unit_bulk(), Bulk::from_normal(3));
        assert_eq!(armor.clone().equipped(true).unit_bulk(), Bulk::ONE);

        let plain = BulkItem::new().with_bulk(Bulk::LIGHT).equipped(true);
        assert_eq!(plain.unit_bulk(), Bulk::LIGHT);
    }

    #[test]
    fn defaults_to_single_medium_item() {
        let item = BulkItem::default();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.size, Size::Medium);
        assert!(item.holds_items.is_empty());
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut item = BulkItem::new().with_bulk(Bulk::LIGHT);
        for _ in 0..200_000 {
            item = BulkItem::new().holding(vec![item]);
        }
        drop(item);
    }
}
