//! Flat item records as supplied by the document layer.

use core::fmt;

use crate::bulk::{BulkItem, Size, weight_to_bulk};

/// Opaque identifier of an item document.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One carried item as stored by the host, before tree construction.
///
/// Weight-like fields hold Bulk notation (`"L"`, `"2"`, `"1; 3L"`); absent or
/// unparseable values behave as negligible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRecord {
    pub id: ItemId,
    pub weight: Option<String>,
    pub quantity: u32,
    /// Id of the item holding this one; dangling ids mean top-level.
    pub container_id: Option<ItemId>,
    pub stack_group: Option<String>,
    pub equipped: bool,
    pub equipped_weight: Option<String>,
    pub unequipped_weight: Option<String>,
    pub negate_bulk: Option<String>,
    pub capacity: Option<String>,
    pub extradimensional: bool,
    pub size: Size,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            weight: None,
            quantity: 1,
            container_id: None,
            stack_group: None,
            equipped: false,
            equipped_weight: None,
            unequipped_weight: None,
            negate_bulk: None,
            capacity: None,
            extradimensional: false,
            size: Size::Medium,
        }
    }
}

impl ItemRecord {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn in_container(mut self, container_id: impl Into<ItemId>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }

    #[must_use]
    pub fn with_stack_group(mut self, group: impl Into<String>) -> Self {
        self.stack_group = Some(group.into());
        self
    }

    #[must_use]
    pub fn equipped(mut self, equipped: bool) -> Self {
        self.equipped = equipped;
        self
    }

    #[must_use]
    pub fn with_equipped_weight(mut self, weight: impl Into<String>) -> Self {
        self.equipped_weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn with_unequipped_weight(mut self, weight: impl Into<String>) -> Self {
        self.unequipped_weight = Some(weight.into());
        self
    }

    #[must_use]
    pub fn with_negate_bulk(mut self, negate_bulk: impl Into<String>) -> Self {
        self.negate_bulk = Some(negate_bulk.into());
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.capacity = Some(capacity.into());
        self
    }

    #[must_use]
    pub fn extradimensional(mut self, extradimensional: bool) -> Self {
        self.extradimensional = extradimensional;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Tree node for this record holding `holds_items`.
    pub fn to_bulk_item(&self, holds_items: Vec<BulkItem>) -> BulkItem {
        BulkItem {
            id: Some(self.id.clone()),
            bulk: weight_to_bulk(self.weight.as_deref()).unwrap_or_default(),
            equipped_bulk: weight_to_bulk(self.equipped_weight.as_deref()),
            unequipped_bulk: weight_to_bulk(self.unequipped_weight.as_deref()),
            quantity: self.quantity,
            stack_group: self.stack_group.clone(),
            is_equipped: self.equipped,
            extradimensional_container: self.extradimensional,
            negate_bulk: weight_to_bulk(self.negate_bulk.as_deref()).unwrap_or_default(),
            size: self.size,
            holds_items,
        }
    }
}
