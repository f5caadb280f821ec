//! The Bulk value type.
//!
//! Bulk is a two-component quantity: whole Bulk ("normal") and light Bulk,
//! where ten light Bulk make one normal Bulk. Values are always normalized
//! (`light < 10`) and never negative.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

/// Light Bulk units per normal Bulk unit.
pub const LIGHT_PER_NORMAL: u32 = 10;

/// An immutable Bulk quantity.
///
/// # Example
/// ```
/// # use bulk_core::Bulk;
/// let eleven_light = Bulk::from_light(11);
/// assert_eq!(eleven_light, Bulk::new(1, 1));
/// assert_eq!(eleven_light.to_light_bulk(), 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "BulkRepr", into = "BulkRepr")
)]
pub struct Bulk {
    normal: u32,
    light: u32,
}

impl Bulk {
    /// Negligible Bulk (`-`).
    pub const NEGLIGIBLE: Self = Self {
        normal: 0,
        light: 0,
    };

    /// One light Bulk (`L`).
    pub const LIGHT: Self = Self {
        normal: 0,
        light: 1,
    };

    /// One normal Bulk.
    pub const ONE: Self = Self {
        normal: 1,
        light: 0,
    };

    /// Creates a normalized value; light units of ten or more carry into normal.
    pub const fn new(normal: u32, light: u32) -> Self {
        Self {
            normal: normal.saturating_add(light / LIGHT_PER_NORMAL),
            light: light % LIGHT_PER_NORMAL,
        }
    }

    pub const fn from_normal(normal: u32) -> Self {
        Self::new(normal, 0)
    }

    pub const fn from_light(light: u32) -> Self {
        Self::new(0, light)
    }

    #[inline]
    pub const fn normal(&self) -> u32 {
        self.normal
    }

    #[inline]
    pub const fn light(&self) -> u32 {
        self.light
    }

    /// Canonical single-number form used for all comparisons and thresholds.
    #[inline]
    pub const fn to_light_bulk(&self) -> u32 {
        self.normal
            .saturating_mul(LIGHT_PER_NORMAL)
            .saturating_add(self.light)
    }

    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self::from_light(self.to_light_bulk().saturating_add(other.to_light_bulk()))
    }

    /// Subtracts, clamping at negligible.
    #[must_use]
    pub const fn minus(self, other: Self) -> Self {
        Self::from_light(self.to_light_bulk().saturating_sub(other.to_light_bulk()))
    }

    /// Scales both components by `factor`.
    ///
    /// A positive result smaller than one light Bulk becomes light: an item
    /// whose Bulk would be reduced below 1 becomes L.
    #[must_use]
    pub fn times(self, factor: f64) -> Self {
        let scaled = f64::from(self.to_light_bulk()) * factor.max(0.0);
        if scaled > 0.0 && scaled < 1.0 {
            return Self::LIGHT;
        }
        // Float-to-int casts saturate, so oversized products clamp to u32::MAX.
        Self::from_light(scaled.floor() as u32)
    }

    /// Multiplies by a whole quantity.
    #[must_use]
    pub const fn times_quantity(self, quantity: u32) -> Self {
        Self::from_light(self.to_light_bulk().saturating_mul(quantity))
    }

    /// One size step up.
    ///
    /// Negligible becomes L, light Bulk becomes that many normal Bulk, and
    /// everything else doubles.
    #[must_use]
    pub fn double(self) -> Self {
        if self.is_negligible() {
            Self::LIGHT
        } else if self.is_light() {
            Self::from_normal(self.light)
        } else {
            self.times(2.0)
        }
    }

    /// One size step down.
    ///
    /// Negligible and light Bulk vanish, exactly 1 Bulk becomes L, and
    /// everything else halves to whole Bulk, rounding a half step up so that
    /// 3 Bulk shrinks to 2 rather than 1.
    #[must_use]
    pub fn halve(self) -> Self {
        if self.is_negligible() || self.is_light() {
            Self::NEGLIGIBLE
        } else if self.is_equal_to(Self::ONE) {
            Self::LIGHT
        } else {
            let doubled_normal = LIGHT_PER_NORMAL * 2;
            Self::from_normal(self.to_light_bulk().div_ceil(doubled_normal))
        }
    }

    pub const fn is_smaller_than(&self, other: Self) -> bool {
        self.to_light_bulk() < other.to_light_bulk()
    }

    pub const fn is_bigger_than(&self, other: Self) -> bool {
        self.to_light_bulk() > other.to_light_bulk()
    }

    pub const fn is_equal_to(&self, other: Self) -> bool {
        self.to_light_bulk() == other.to_light_bulk()
    }

    pub const fn is_negligible(&self) -> bool {
        self.normal == 0 && self.light == 0
    }

    /// Strictly between negligible and 1 Bulk.
    pub const fn is_light(&self) -> bool {
        let total = self.to_light_bulk();
        total > 0 && total < LIGHT_PER_NORMAL
    }

    pub const fn is_positive(&self) -> bool {
        self.to_light_bulk() > 0
    }
}

impl Add for Bulk {
    type Output = Bulk;

    fn add(self, rhs: Bulk) -> Bulk {
        self.plus(rhs)
    }
}

impl Sub for Bulk {
    type Output = Bulk;

    fn sub(self, rhs: Bulk) -> Bulk {
        self.minus(rhs)
    }
}

impl core::iter::Sum for Bulk {
    fn sum<I: Iterator<Item = Bulk>>(iter: I) -> Bulk {
        iter.fold(Bulk::NEGLIGIBLE, Bulk::plus)
    }
}

impl PartialOrd for Bulk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bulk {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_light_bulk().cmp(&other.to_light_bulk())
    }
}

impl fmt::Display for Bulk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::parse::format_bulk(*self))
    }
}

// Deserialized values go through `Bulk::new` so they are always normalized.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct BulkRepr {
    #[serde(default)]
    normal: u32,
    #[serde(default)]
    light: u32,
}

#[cfg(feature = "serde")]
impl From<BulkRepr> for Bulk {
    fn from(repr: BulkRepr) -> Self {
        Bulk::new(repr.normal, repr.light)
    }
}

#[cfg(feature = "serde")]
impl From<Bulk> for BulkRepr {
    fn from(bulk: Bulk) -> Self {
        BulkRepr {
            normal: bulk.normal,
            light: bulk.light,
        }
    }
}
