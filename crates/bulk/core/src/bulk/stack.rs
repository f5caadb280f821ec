//! Stack groups: interchangeable countable items weighed per full stack.

use std::collections::BTreeMap;

use super::size::{Size, convert_bulk_to_size};
use super::value::Bulk;
use crate::config::BulkConfig;
use crate::error::{BulkError, BulkResult};

/// Stack group whose Bulk is dropped when [`BulkConfig::ignore_coin_bulk`] is set.
pub const COINS: &str = "coins";

/// How many raw units form one stack, and how much light Bulk a stack weighs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackDefinition {
    pub size: u32,
    pub light_bulk: u32,
}

impl StackDefinition {
    pub const fn new(size: u32, light_bulk: u32) -> Self {
        Self { size, light_bulk }
    }
}

/// Table of stack definitions keyed by stack-group name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StackDefinitions {
    groups: BTreeMap<String, StackDefinition>,
}

impl StackDefinitions {
    /// An empty table; every stack group is unknown.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    pub fn get(&self, group: &str) -> Option<&StackDefinition> {
        self.groups.get(group)
    }

    /// Looks up a group, failing for names missing from the table.
    pub fn require(&self, group: &str) -> BulkResult<&StackDefinition> {
        self.get(group)
            .ok_or_else(|| BulkError::UnknownStackGroup(group.to_string()))
    }

    pub fn insert(&mut self, group: impl Into<String>, definition: StackDefinition) {
        self.groups.insert(group.into(), definition);
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StackDefinition)> {
        self.groups.iter().map(|(name, def)| (name.as_str(), def))
    }
}

impl Default for StackDefinitions {
    /// The standard table: ammunition in tens, rations in sevens, coins by
    /// the thousand and gems by the two thousand.
    fn default() -> Self {
        [
            ("bolts", StackDefinition::new(10, 1)),
            ("arrows", StackDefinition::new(10, 1)),
            ("slingBullets", StackDefinition::new(10, 1)),
            ("blowgunDarts", StackDefinition::new(10, 1)),
            ("rations", StackDefinition::new(7, 1)),
            (COINS, StackDefinition::new(1000, 10)),
            ("gems", StackDefinition::new(2000, 10)),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, StackDefinition)> for StackDefinitions {
    fn from_iter<I: IntoIterator<Item = (S, StackDefinition)>>(iter: I) -> Self {
        Self {
            groups: iter
                .into_iter()
                .map(|(name, definition)| (name.into(), definition))
                .collect(),
        }
    }
}

/// Leftover raw quantities per stack group that did not fill a stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StackGroupOverflow(BTreeMap<String, u32>);

impl StackGroupOverflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(group: impl Into<String>, quantity: u32) -> Self {
        let mut overflow = Self::new();
        overflow.add(group, quantity);
        overflow
    }

    /// Adds `quantity` to a group, creating it if absent.
    pub fn add(&mut self, group: impl Into<String>, quantity: u32) {
        let entry = self.0.entry(group.into()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Same-key addition of another overflow map.
    pub fn merge(&mut self, other: StackGroupOverflow) {
        for (group, quantity) in other.0 {
            self.add(group, quantity);
        }
    }

    pub fn get(&self, group: &str) -> u32 {
        self.0.get(group).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, quantity)| (name.as_str(), *quantity))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for StackGroupOverflow {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut overflow = Self::new();
        for (group, quantity) in iter {
            overflow.add(group, quantity);
        }
        overflow
    }
}

/// Converts raw stack-group quantities into Bulk.
///
/// Each group contributes `floor(quantity / size) * light_bulk` light Bulk,
/// converted from `item_size` to `actor_size`; groups without a full stack
/// contribute nothing. Non-zero remainders are returned as overflow.
/// Coins are skipped entirely when `config.ignore_coin_bulk` is set.
///
/// # Errors
///
/// [`BulkError::UnknownStackGroup`] if a group is missing from `definitions`.
pub fn calculate_stack_bulk(
    item_stacks: &StackGroupOverflow,
    definitions: &StackDefinitions,
    config: &BulkConfig,
    actor_size: Size,
    item_size: Size,
) -> BulkResult<(Bulk, StackGroupOverflow)> {
    let mut bulk = Bulk::NEGLIGIBLE;
    let mut overflow = StackGroupOverflow::new();

    for (group, quantity) in item_stacks.iter() {
        if group == COINS && config.ignore_coin_bulk {
            continue;
        }
        let definition = definitions.require(group)?;
        // A zero-sized stack can never fill; everything stays overflow.
        let full_stacks = quantity.checked_div(definition.size).unwrap_or(0);
        let remainder = quantity.checked_rem(definition.size).unwrap_or(quantity);

        if full_stacks > 0 {
            let stack_bulk = Bulk::from_light(full_stacks.saturating_mul(definition.light_bulk));
            bulk = bulk.plus(convert_bulk_to_size(stack_bulk, item_size, actor_size));
        }
        if remainder > 0 {
            overflow.add(group, remainder);
        }
    }

    Ok((bulk, overflow))
}
