//! Creature and item size categories and Bulk conversion between them.

use super::value::Bulk;

/// Size category of a creature or of the creature an item is made for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Size {
    Tiny,
    #[strum(to_string = "small", serialize = "sm")]
    #[cfg_attr(feature = "serde", serde(alias = "sm"))]
    Small,
    #[default]
    #[strum(to_string = "medium", serialize = "med")]
    #[cfg_attr(feature = "serde", serde(alias = "med"))]
    Medium,
    #[strum(to_string = "large", serialize = "lg")]
    #[cfg_attr(feature = "serde", serde(alias = "lg"))]
    Large,
    Huge,
    #[strum(to_string = "gargantuan", serialize = "grg")]
    #[cfg_attr(feature = "serde", serde(alias = "grg"))]
    Gargantuan,
}

impl Size {
    /// Position on the Bulk scale; small and medium share a step.
    pub const fn bulk_step(self) -> u32 {
        match self {
            Size::Tiny => 0,
            Size::Small | Size::Medium => 1,
            Size::Large => 2,
            Size::Huge => 3,
            Size::Gargantuan => 4,
        }
    }
}

/// Converts Bulk of an item made for `item_size` into Bulk as carried by a
/// creature of `actor_size`.
///
/// An item larger than the target halves once per size step; a smaller one
/// doubles once per step. When the target is tiny, negligible Bulk halves one
/// step fewer.
///
/// # Example
/// ```
/// # use bulk_core::{Bulk, Size, convert_bulk_to_size};
/// let gargantuan = convert_bulk_to_size(Bulk::from_normal(4), Size::Gargantuan, Size::Medium);
/// assert_eq!(gargantuan, Bulk::LIGHT);
/// ```
pub fn convert_bulk_to_size(bulk: Bulk, item_size: Size, actor_size: Size) -> Bulk {
    let item_step = item_size.bulk_step();
    let actor_step = actor_size.bulk_step();

    if item_step > actor_step {
        let mut steps = item_step - actor_step;
        if actor_size == Size::Tiny && bulk.is_negligible() {
            steps -= 1;
        }
        (0..steps).fold(bulk, |acc, _| acc.halve())
    } else if item_step < actor_step {
        (0..actor_step - item_step).fold(bulk, |acc, _| acc.double())
    } else {
        bulk
    }
}
