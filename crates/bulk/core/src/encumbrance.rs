//! Carrying thresholds derived from a creature's strength and size.

use crate::bulk::{Bulk, LIGHT_PER_NORMAL, Size};

/// Encumbrance state for a total carried Bulk.
///
/// Thresholds are stored in light Bulk so they compare directly against
/// [`Bulk::to_light_bulk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encumbrance {
    pub combined_bulk: Bulk,
    pub encumbered_at: u32,
    pub limit: u32,
}

impl Encumbrance {
    /// Whole Bulk carried, light remainder dropped.
    pub const fn bulk(&self) -> u32 {
        self.combined_bulk.normal()
    }

    pub const fn is_encumbered(&self) -> bool {
        self.combined_bulk.to_light_bulk() > self.encumbered_at
    }

    pub const fn is_over_limit(&self) -> bool {
        self.combined_bulk.to_light_bulk() > self.limit
    }

    pub fn encumbered_percentage(&self) -> u32 {
        percentage(self.combined_bulk, self.encumbered_at)
    }

    pub fn encumbered_percentage_max_100(&self) -> u32 {
        self.encumbered_percentage().min(100)
    }

    pub fn limit_percentage(&self) -> u32 {
        percentage(self.combined_bulk, self.limit)
    }

    pub fn limit_percentage_max_100(&self) -> u32 {
        self.limit_percentage().min(100)
    }
}

fn percentage(bulk: Bulk, threshold: u32) -> u32 {
    if threshold == 0 {
        return 0;
    }
    let held = u64::from(bulk.to_light_bulk());
    u32::try_from(held * 100 / u64::from(threshold)).unwrap_or(u32::MAX)
}

/// Scales a threshold in light Bulk by how much a creature of `size` can carry.
fn scale_for_size(light_bulk: i64, size: Size) -> u32 {
    let scaled = match size {
        Size::Tiny => light_bulk.div_euclid(2),
        Size::Small | Size::Medium => light_bulk,
        Size::Large => light_bulk * 2,
        Size::Huge => light_bulk * 4,
        Size::Gargantuan => light_bulk * 8,
    };
    u32::try_from(scaled.max(0)).unwrap_or(u32::MAX)
}

/// Computes encumbrance for `combined_bulk` carried by a creature.
///
/// A creature is encumbered above `strength + 5` Bulk and cannot carry more
/// than `strength + 10`, each adjusted by its bonus and scaled by size.
///
/// # Example
/// ```
/// # use bulk_core::{Bulk, Size, calculate_encumbrance};
/// let encumbrance = calculate_encumbrance(2, 0, 0, Bulk::new(7, 5), Size::Medium);
/// assert_eq!(encumbrance.encumbered_at, 70);
/// assert_eq!(encumbrance.limit, 120);
/// assert!(encumbrance.is_encumbered());
/// assert!(!encumbrance.is_over_limit());
/// ```
pub fn calculate_encumbrance(
    strength: i32,
    bonus_limit: i32,
    bonus_encumbered: i32,
    combined_bulk: Bulk,
    actor_size: Size,
) -> Encumbrance {
    let per_normal = i64::from(LIGHT_PER_NORMAL);
    let strength = i64::from(strength);
    let encumbered_at = (strength + i64::from(bonus_encumbered) + 5) * per_normal;
    let limit = (strength + i64::from(bonus_limit) + 10) * per_normal;

    let encumbrance = Encumbrance {
        combined_bulk,
        encumbered_at: scale_for_size(encumbered_at, actor_size),
        limit: scale_for_size(limit, actor_size),
    };
    tracing::trace!(
        bulk = %combined_bulk,
        encumbered_at = encumbrance.encumbered_at,
        limit = encumbrance.limit,
        "calculated encumbrance"
    );
    encumbrance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_thresholds() {
        let encumbrance = calculate_encumbrance(0, 0, 0, Bulk::from_normal(5), Size::Medium);
        assert_eq!(encumbrance.encumbered_at, 50);
        assert_eq!(encumbrance.limit, 100);
        assert_eq!(encumbrance.bulk(), 5);
        // exactly at the threshold is not yet encumbered
        assert!(!encumbrance.is_encumbered());
        assert_eq!(encumbrance.encumbered_percentage(), 100);
        assert_eq!(encumbrance.limit_percentage(), 50);
    }

    #[test]
    fn light_bulk_tips_over_threshold() {
        let encumbrance = calculate_encumbrance(0, 0, 0, Bulk::new(5, 1), Size::Medium);
        assert!(encumbrance.is_encumbered());
        assert_eq!(encumbrance.bulk(), 5);
        assert_eq!(encumbrance.encumbered_percentage(), 102);
        assert_eq!(encumbrance.encumbered_percentage_max_100(), 100);
    }

    #[test]
    fn bonuses_apply_separately() {
        let encumbrance = calculate_encumbrance(3, 2, 1, Bulk::NEGLIGIBLE, Size::Small);
        assert_eq!(encumbrance.encumbered_at, 90);
        assert_eq!(encumbrance.limit, 150);
    }

    #[test]
    fn size_scales_thresholds() {
        let tiny = calculate_encumbrance(0, 0, 0, Bulk::NEGLIGIBLE, Size::Tiny);
        assert_eq!((tiny.encumbered_at, tiny.limit), (25, 50));

        let large = calculate_encumbrance(0, 0, 0, Bulk::NEGLIGIBLE, Size::Large);
        assert_eq!((large.encumbered_at, large.limit), (100, 200));

        let huge = calculate_encumbrance(0, 0, 0, Bulk::NEGLIGIBLE, Size::Huge);
        assert_eq!((huge.encumbered_at, huge.limit), (200, 400));

        let gargantuan = calculate_encumbrance(0, 0, 0, Bulk::NEGLIGIBLE, Size::Gargantuan);
        assert_eq!((gargantuan.encumbered_at, gargantuan.limit), (400, 800));
    }

    #[test]
    fn weak_creature_floors_at_zero() {
        let encumbrance = calculate_encumbrance(-8, -5, 0, Bulk::LIGHT, Size::Medium);
        assert_eq!(encumbrance.encumbered_at, 0);
        assert_eq!(encumbrance.limit, 0);
        assert!(encumbrance.is_encumbered());
        assert!(encumbrance.is_over_limit());
        assert_eq!(encumbrance.encumbered_percentage(), 0);
        assert_eq!(encumbrance.limit_percentage_max_100(), 0);
    }
}
