//! # Quantity Module
//!
//! Fixed-point quantities for inventory accounting, in tenths of a
//! milliliter or gram.
//!
//! ## Why Tenths?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A Small drink scales every recipe quantity by 0.8:                     │
//! │                                                                         │
//! │    18 g of beans × 0.8 = 14.4 g   ← not a whole number!                 │
//! │                                                                         │
//! │  Floats would accumulate error across hundreds of brews. The size       │
//! │  multipliers (0.8 / 1.0 / 1.2) and all recipe quantities have at        │
//! │  most one decimal place, so tenths make every level exact:              │
//! │                                                                         │
//! │    180 tenths × 80 / 100 = 144 tenths = 14.4 g, exactly                 │
//! │                                                                         │
//! │  Same rule as Money: integers internally, one rounding site.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

/// An inventory amount in tenths of a milliliter or gram.
///
/// The unit (ml vs g) is carried by the resource, not the quantity; water
/// and milk levels are ml, beans are g, and the arithmetic is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from whole units (ml or g).
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::quantity::Quantity;
    ///
    /// let water = Quantity::from_units(2000); // a full 2000 ml tank
    /// assert_eq!(water.tenths(), 20000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * 10)
    }

    /// Creates a quantity from tenths of a unit.
    #[inline]
    pub const fn from_tenths(tenths: i64) -> Self {
        Quantity(tenths)
    }

    /// Returns the raw value in tenths of a unit.
    #[inline]
    pub const fn tenths(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 10
    }

    /// Returns zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scales by a size multiplier expressed in percent, rounding once.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::quantity::Quantity;
    ///
    /// let beans = Quantity::from_units(18);
    /// assert_eq!(beans.scaled(80).tenths(), 144);  // 14.4 g
    /// assert_eq!(beans.scaled(120).tenths(), 216); // 21.6 g
    /// ```
    pub fn scaled(&self, pct: u32) -> Quantity {
        let scaled = (self.0 as i128 * pct as i128 + 50) / 100;
        Quantity(scaled as i64)
    }
}

/// Display shows the amount with one decimal place, e.g. `14.4`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{}", sign, (self.0 / 10).abs(), (self.0 % 10).abs())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::zero()
    }
}

impl Add for Quantity {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Quantity(self.0 + other.0)
    }
}

impl AddAssign for Quantity {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Quantity(self.0 - other.0)
    }
}

impl SubAssign for Quantity {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}
