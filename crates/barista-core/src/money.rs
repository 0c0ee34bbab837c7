//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A $25.00 latte at the Small multiplier:                                │
//! │    25.0 × 0.8 = 20.000000000000004  → What do we charge?               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2500 cents × 80 / 100 = 2000 cents, exactly                          │
//! │    Every multiplier and discount rounds in ONE documented place         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barista_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1500); // $15.00
//!
//! // Size and discount rules
//! let small = price.apply_size_multiplier(80);      // $12.00
//! let friday = price.apply_percentage_discount(25); // $11.25
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values in display math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// DrinkRecipe.price ──► size multiplier ──► extras ──► daily special
///                                                          │
///                 Balance ◄── debit ◄── final charge ◄─────┘
///                                            │
///                                            └──► SalesStats.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let price = Money::from_cents(1500); // Represents $15.00
    /// assert_eq!(price.cents(), 1500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let price = Money::from_major_minor(15, 50); // $15.50
    /// assert_eq!(price.cents(), 1550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales a price by a size multiplier expressed in percent.
    ///
    /// ## Why Percent?
    /// The size table is Small ×0.8, Medium ×1.0, Large ×1.2, all exact
    /// in hundredths, so the multiplier is carried as 80/100/120 and the
    /// rounding happens once here: `(cents × pct + 50) / 100`.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let base = Money::from_cents(2500);               // $25.00 latte
    /// assert_eq!(base.apply_size_multiplier(80).cents(), 2000);  // Small
    /// assert_eq!(base.apply_size_multiplier(120).cents(), 3000); // Large
    /// ```
    pub fn apply_size_multiplier(&self, pct: u32) -> Money {
        // i128 intermediate to prevent overflow on large amounts
        let scaled = (self.0 as i128 * pct as i128 + 50) / 100;
        Money::from_cents(scaled as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `pct` - Discount in whole percent (25 = 25% off)
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let espresso = Money::from_cents(1500); // $15.00
    /// let friday = espresso.apply_percentage_discount(25);
    /// assert_eq!(friday.cents(), 1125); // $11.25
    /// ```
    pub fn apply_percentage_discount(&self, pct: u32) -> Money {
        // Calculate discount amount with rounding, then subtract
        let discount_amount = (self.0 as i128 * pct as i128 + 50) / 100;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and warnings. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for unit counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1599);
        assert_eq!(money.cents(), 1599);
        assert_eq!(money.dollars(), 15);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(15, 50);
        assert_eq!(money.cents(), 1550);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1500)), "$15.00");
        assert_eq!(format!("{}", Money::from_cents(1125)), "$11.25");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 2500);
        assert_eq!((a - b).cents(), 1500);
        let result: Money = b * 3;
        assert_eq!(result.cents(), 1500);

        let mut balance = Money::from_cents(2000);
        balance -= Money::from_cents(1500);
        assert_eq!(balance.cents(), 500);
    }

    #[test]
    fn test_size_multiplier() {
        // The full size table against the $25.00 base
        let base = Money::from_cents(2500);
        assert_eq!(base.apply_size_multiplier(80).cents(), 2000);
        assert_eq!(base.apply_size_multiplier(100).cents(), 2500);
        assert_eq!(base.apply_size_multiplier(120).cents(), 3000);
    }

    #[test]
    fn test_size_multiplier_rounds() {
        // $0.05 × 0.8 = $0.04 exactly; $0.03 × 0.8 = 2.4 cents → 2 cents
        assert_eq!(Money::from_cents(5).apply_size_multiplier(80).cents(), 4);
        assert_eq!(Money::from_cents(3).apply_size_multiplier(80).cents(), 2);
    }

    #[test]
    fn test_percentage_discount() {
        let espresso = Money::from_cents(1500);
        assert_eq!(espresso.apply_percentage_discount(25).cents(), 1125);

        let americano = Money::from_cents(2000);
        assert_eq!(americano.apply_percentage_discount(20).cents(), 1600);

        // 0% discount is the identity
        assert_eq!(espresso.apply_percentage_discount(0), espresso);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
