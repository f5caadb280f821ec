//! Bulk: values, notation, size scaling, stack math and tree aggregation.

pub mod aggregate;
pub mod item;
pub mod parse;
pub mod size;
pub mod stack;
pub mod value;

pub use aggregate::{calculate_bulk, calculate_combined_bulk};
pub use item::BulkItem;
pub use parse::{
    LegacyWeight, bulk_to_weight_string, calculate_carried_armor_bulk, fix_weight, format_bulk,
    parse_weight, weight_to_bulk,
};
pub use size::{Size, convert_bulk_to_size};
pub use stack::{
    COINS, StackDefinition, StackDefinitions, StackGroupOverflow, calculate_stack_bulk,
};
pub use value::{Bulk, LIGHT_PER_NORMAL};
