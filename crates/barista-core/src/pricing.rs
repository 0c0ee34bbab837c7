//! # Pricing Engine
//!
//! Pure price computation for an order: base price × size multiplier,
//! plus extras, minus the daily special.
//!
//! ## Price Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Espresso ($15.00)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  × Size multiplier (Small 0.8 / Medium 1.0 / Large 1.2)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  + each selected extra's flat price                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  − today's special discount (if it names this drink, or all drinks)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Final charge                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are deterministic and never touch inventory or balance;
//! availability is checked separately by [`crate::inventory::InventoryStore`].

use chrono::Weekday;

use crate::menu::{daily_special, Drink, Extra, Size};
use crate::money::Money;

/// Computes the undiscounted price of an order.
///
/// ## Example
/// ```rust
/// use barista_core::menu::{Drink, Extra, Size};
/// use barista_core::pricing::price;
///
/// let p = price(Drink::Latte, Size::Large, &[Extra::WhippedCream]);
/// assert_eq!(p.cents(), 3200); // $25.00 × 1.2 + $2.00
/// ```
pub fn price(drink: Drink, size: Size, extras: &[Extra]) -> Money {
    let base = drink
        .recipe()
        .price
        .apply_size_multiplier(size.multiplier_pct());

    extras.iter().fold(base, |total, extra| total + extra.price())
}

/// Computes the final charge after the weekday's special.
///
/// The weekday is supplied by the caller at each call so the discount
/// always reflects the current day; nothing is cached here.
pub fn discounted_price(drink: Drink, size: Size, extras: &[Extra], weekday: Weekday) -> Money {
    let full = price(drink, size, extras);

    let special = daily_special(weekday);
    if special.applies_to(drink) {
        full.apply_percentage_discount(special.discount_pct)
    } else {
        full
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_medium_is_base_price() {
        assert_eq!(price(Drink::Espresso, Size::Medium, &[]).cents(), 1500);
        assert_eq!(price(Drink::Mocha, Size::Medium, &[]).cents(), 3000);
    }

    #[test]
    fn test_price_scales_with_size() {
        assert_eq!(price(Drink::Espresso, Size::Small, &[]).cents(), 1200);
        assert_eq!(price(Drink::Espresso, Size::Large, &[]).cents(), 1800);
    }

    #[test]
    fn test_extras_are_flat_additions() {
        // Extras never scale with size
        let small = price(Drink::Espresso, Size::Small, &[Extra::ExtraShot]);
        assert_eq!(small.cents(), 1200 + 500);

        let large = price(
            Drink::Mocha,
            Size::Large,
            &[Extra::CaramelSyrup, Extra::WhippedCream],
        );
        assert_eq!(large.cents(), 3600 + 300 + 200);
    }

    #[test]
    fn test_friday_espresso_special() {
        // Friday: Espresso 25% off
        let charged = discounted_price(Drink::Espresso, Size::Medium, &[], Weekday::Fri);
        assert_eq!(charged.cents(), 1125);

        // Other drinks pay full price on Friday
        let mocha = discounted_price(Drink::Mocha, Size::Medium, &[], Weekday::Fri);
        assert_eq!(mocha.cents(), 3000);
    }

    #[test]
    fn test_sunday_discounts_everything() {
        for drink in Drink::ALL {
            let full = price(drink, Size::Medium, &[]);
            let charged = discounted_price(drink, Size::Medium, &[], Weekday::Sun);
            assert_eq!(charged, full.apply_percentage_discount(10));
        }
    }

    #[test]
    fn test_discount_applies_after_extras() {
        // $15.00 × 0.8 + $5.00 = $17.00, then 25% off = $12.75
        let charged = discounted_price(
            Drink::Espresso,
            Size::Small,
            &[Extra::ExtraShot],
            Weekday::Fri,
        );
        assert_eq!(charged.cents(), 1275);
    }

    #[test]
    fn test_price_is_deterministic_and_non_negative() {
        for drink in Drink::ALL {
            for size in Size::ALL {
                for extra in Extra::ALL {
                    let extras = [extra];
                    let p = price(drink, size, &extras);
                    assert!(!p.is_negative());
                    assert_eq!(p, price(drink, size, &extras));
                }
            }
        }
    }

    #[test]
    fn test_discounted_never_exceeds_full_price() {
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        for drink in Drink::ALL {
            for size in Size::ALL {
                for weekday in weekdays {
                    let full = price(drink, size, &[]);
                    let charged = discounted_price(drink, size, &[], weekday);
                    assert!(charged <= full, "{drink} {size} on {weekday}");
                }
            }
        }
    }
}
