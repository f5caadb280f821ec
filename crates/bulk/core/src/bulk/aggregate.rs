//! Tree aggregation: combines an item's own Bulk with everything it holds.
//!
//! # Algorithm
//!
//! Post-order over the item tree, per node:
//!
//! ```text
//! own Bulk (stack math, or unit Bulk × quantity, size-converted)
//!   + children Bulk − negate Bulk (active extradimensional / equipped container)
//!   + Bulk of stacks completed by merging own and children overflow
//! ```
//!
//! Overflow from children is dropped at extradimensional containers and, when
//! [`BulkConfig::ignore_container_overflow`] is set, at every real container.
//! Only the outermost of nested extradimensional containers negates Bulk.
//!
//! The walk uses an explicit frame stack, so inventory depth is bounded by
//! memory rather than the call stack. Input must be cycle-free; owned
//! [`BulkItem`] trees are by construction.

use super::item::BulkItem;
use super::size::{Size, convert_bulk_to_size};
use super::stack::{StackDefinitions, StackGroupOverflow, calculate_stack_bulk};
use super::value::Bulk;
use crate::config::BulkConfig;
use crate::error::BulkResult;

/// Shared inputs of one aggregation pass.
#[derive(Clone, Copy, Debug)]
struct BulkContext<'a> {
    definitions: &'a StackDefinitions,
    config: &'a BulkConfig,
    actor_size: Size,
}

/// One in-progress node of the post-order walk.
struct Frame<'a> {
    /// `None` for the synthetic inventory root.
    item: Option<&'a BulkItem>,
    children: &'a [BulkItem],
    nested_in_extradimensional: bool,
    next_child: usize,
    child_bulk: Bulk,
    child_overflow: StackGroupOverflow,
}

impl<'a> Frame<'a> {
    fn root(items: &'a [BulkItem]) -> Self {
        Self::with(None, items, false)
    }

    fn node(item: &'a BulkItem, nested_in_extradimensional: bool) -> Self {
        Self::with(Some(item), &item.holds_items, nested_in_extradimensional)
    }

    fn with(
        item: Option<&'a BulkItem>,
        children: &'a [BulkItem],
        nested_in_extradimensional: bool,
    ) -> Self {
        Self {
            item,
            children,
            nested_in_extradimensional,
            next_child: 0,
            child_bulk: Bulk::NEGLIGIBLE,
            child_overflow: StackGroupOverflow::new(),
        }
    }

    /// Whether children of this node sit inside any extradimensional space.
    fn nests_children(&self) -> bool {
        self.nested_in_extradimensional
            || self.item.is_some_and(|item| item.extradimensional_container)
    }

    fn absorb(&mut self, (bulk, overflow): (Bulk, StackGroupOverflow)) {
        self.child_bulk = self.child_bulk.plus(bulk);
        self.child_overflow.merge(overflow);
    }

    fn finish(self, ctx: BulkContext<'_>) -> BulkResult<(Bulk, StackGroupOverflow)> {
        let Some(item) = self.item else {
            // The inventory root weighs nothing and is not a container.
            let (overflow_bulk, remaining) = stack_bulk(&self.child_overflow, Size::Medium, ctx)?;
            return Ok((self.child_bulk.plus(overflow_bulk), remaining));
        };

        let (own_bulk, mut overflow) = calculate_item_bulk(item, ctx)?;
        let children_bulk =
            reduce_nested_item_bulk(self.child_bulk, item, self.nested_in_extradimensional);

        let drops_overflow =
            item.extradimensional_container || ctx.config.ignore_container_overflow;
        if !drops_overflow {
            overflow.merge(self.child_overflow);
        }

        let (overflow_bulk, remaining) = stack_bulk(&overflow, item.size, ctx)?;
        let total = own_bulk.plus(children_bulk).plus(overflow_bulk);
        tracing::trace!(item = ?item.id, bulk = %total, "combined item bulk");
        Ok((total, remaining))
    }
}

fn stack_bulk(
    stacks: &StackGroupOverflow,
    item_size: Size,
    ctx: BulkContext<'_>,
) -> BulkResult<(Bulk, StackGroupOverflow)> {
    calculate_stack_bulk(
        stacks,
        ctx.definitions,
        ctx.config,
        ctx.actor_size,
        item_size,
    )
}

/// Own Bulk of a node, ignoring anything it holds.
fn calculate_item_bulk(
    item: &BulkItem,
    ctx: BulkContext<'_>,
) -> BulkResult<(Bulk, StackGroupOverflow)> {
    match item.stack_group.as_deref().map(str::trim) {
        Some(group) if !group.is_empty() => {
            stack_bulk(&StackGroupOverflow::single(group, item.quantity), item.size, ctx)
        }
        _ => {
            let unit = convert_bulk_to_size(item.unit_bulk(), item.size, ctx.actor_size);
            Ok((unit.times_quantity(item.quantity), StackGroupOverflow::new()))
        }
    }
}

/// Applies a container's negate Bulk to the combined Bulk of its contents.
///
/// The two conditions are independent: an equipped extradimensional
/// container that is not itself nested negates twice.
fn reduce_nested_item_bulk(bulk: Bulk, item: &BulkItem, nested_in_extradimensional: bool) -> Bulk {
    let mut reduced = bulk;
    if item.extradimensional_container && !nested_in_extradimensional {
        reduced = reduced.minus(item.negate_bulk);
    }
    if item.is_equipped {
        reduced = reduced.minus(item.negate_bulk);
    }
    reduced
}

fn aggregate(root: Frame<'_>, ctx: BulkContext<'_>) -> BulkResult<(Bulk, StackGroupOverflow)> {
    let mut stack = vec![root];

    while let Some(frame) = stack.last_mut() {
        let children = frame.children;
        if let Some(child) = children.get(frame.next_child) {
            frame.next_child += 1;
            let nested = frame.nests_children();
            stack.push(Frame::node(child, nested));
            continue;
        }

        let Some(done) = stack.pop() else { break };
        let result = done.finish(ctx)?;
        match stack.last_mut() {
            Some(parent) => parent.absorb(result),
            None => return Ok(result),
        }
    }

    Ok((Bulk::NEGLIGIBLE, StackGroupOverflow::new()))
}

/// Total Bulk and leftover partial stacks of a flat list of top-level items.
///
/// The items are wrapped in a synthetic inventory root with no Bulk of its own.
///
/// # Errors
///
/// [`crate::BulkError::UnknownStackGroup`] if any item names a stack group
/// missing from `definitions`.
pub fn calculate_bulk(
    items: &[BulkItem],
    definitions: &StackDefinitions,
    config: &BulkConfig,
    actor_size: Size,
) -> BulkResult<(Bulk, StackGroupOverflow)> {
    let ctx = BulkContext {
        definitions,
        config,
        actor_size,
    };
    let result = aggregate(Frame::root(items), ctx)?;
    tracing::debug!(
        items = items.len(),
        bulk = %result.0,
        "calculated inventory bulk"
    );
    Ok(result)
}

/// Combined Bulk and leftover partial stacks of one item and its contents.
///
/// # Errors
///
/// See [`calculate_bulk`].
pub fn calculate_combined_bulk(
    item: &BulkItem,
    definitions: &StackDefinitions,
    config: &BulkConfig,
    actor_size: Size,
) -> BulkResult<(Bulk, StackGroupOverflow)> {
    let ctx = BulkContext {
        definitions,
        config,
        actor_size,
    };
    aggregate(Frame::node(item, false), ctx)
}
