//! # Menu Catalog
//!
//! The fixed menu configuration: drink recipes, size multipliers, extras,
//! and the daily-special table. Everything here is known at compile time.
//!
//! ## Catalog Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Catalog                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Drink       │   │      Size       │   │     Extra       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Espresso       │   │  Small   ×0.8   │   │  ExtraShot  $5  │       │
//! │  │  Americano      │   │  Medium  ×1.0   │   │  Caramel    $3  │       │
//! │  │  Cappuccino     │   │  Large   ×1.2   │   │  Vanilla    $3  │       │
//! │  │  Latte          │   └─────────────────┘   │  Chocolate  $3  │       │
//! │  │  Mocha          │                         │  Cream      $2  │       │
//! │  └───────┬─────────┘                         └────────┬────────┘       │
//! │          │ recipe()                                   │ cost()         │
//! │          ▼                                            ▼                │
//! │  ┌─────────────────┐                         ┌─────────────────┐       │
//! │  │  DrinkRecipe    │                         │    Resource     │       │
//! │  │  price, water,  │                         │  Water, Beans,  │       │
//! │  │  coffee, milk   │                         │  Milk, Syrups…  │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Stringly-Typed Dispatch
//! Resources are an enum, and an extra resolves to `(Resource, Quantity)`
//! directly. There is no name-derived field lookup anywhere in the crate.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::quantity::Quantity;

// =============================================================================
// Resource
// =============================================================================

/// A consumable the machine tracks a level for.
///
/// ## Capacity Constants
/// Water and milk tanks hold 2000 ml; beans and every syrup-family
/// container hold 1000 g/ml. `refill` resets a level to exactly this
/// capacity, never partially tops up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Water,
    CoffeeBeans,
    Milk,
    CaramelSyrup,
    VanillaSyrup,
    ChocolateSauce,
    WhippedCream,
}

impl Resource {
    /// All resources, in display/accounting order.
    pub const ALL: [Resource; 7] = [
        Resource::Water,
        Resource::CoffeeBeans,
        Resource::Milk,
        Resource::CaramelSyrup,
        Resource::VanillaSyrup,
        Resource::ChocolateSauce,
        Resource::WhippedCream,
    ];

    /// Number of tracked resources.
    pub const COUNT: usize = Self::ALL.len();

    /// Full-tank capacity for this resource.
    pub const fn capacity(&self) -> Quantity {
        match self {
            Resource::Water | Resource::Milk => Quantity::from_units(2000),
            _ => Quantity::from_units(1000),
        }
    }

    /// Human-readable label for warnings and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::CoffeeBeans => "coffee beans",
            Resource::Milk => "milk",
            Resource::CaramelSyrup => "caramel syrup",
            Resource::VanillaSyrup => "vanilla syrup",
            Resource::ChocolateSauce => "chocolate sauce",
            Resource::WhippedCream => "whipped cream",
        }
    }

    /// Stable index into per-resource level arrays.
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Drink Recipe
// =============================================================================

/// Fixed ingredient specification and base price for one drink.
///
/// Quantities are per Medium serving; sizes scale water/coffee/milk by the
/// size multiplier. A recipe with `milk` at zero brews without the milk
/// heating and frothing stages.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct DrinkRecipe {
    /// Display name shown in statuses and order records.
    pub name: &'static str,

    /// Base price at Medium size.
    pub price: Money,

    /// Water per serving (ml).
    pub water: Quantity,

    /// Ground coffee per serving (g).
    pub coffee: Quantity,

    /// Milk per serving (ml); zero for black drinks.
    pub milk: Quantity,

    /// Menu description.
    pub description: &'static str,
}

impl DrinkRecipe {
    /// Whether this drink uses milk at all.
    #[inline]
    pub const fn uses_milk(&self) -> bool {
        self.milk.tenths() > 0
    }
}

// =============================================================================
// Drink
// =============================================================================

/// A drink on the menu. The set of drinks is fixed at startup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Drink {
    Espresso,
    Americano,
    Cappuccino,
    Latte,
    Mocha,
}

/// The full menu, keyed by `Drink` discriminant order.
static RECIPES: [DrinkRecipe; 5] = [
    DrinkRecipe {
        name: "Espresso",
        price: Money::from_cents(1500),
        water: Quantity::from_units(30),
        coffee: Quantity::from_units(18),
        milk: Quantity::from_units(0),
        description: "Strong coffee brewed by forcing hot water through finely-ground coffee beans",
    },
    DrinkRecipe {
        name: "Americano",
        price: Money::from_cents(2000),
        water: Quantity::from_units(170),
        coffee: Quantity::from_units(18),
        milk: Quantity::from_units(0),
        description: "Espresso diluted with hot water",
    },
    DrinkRecipe {
        name: "Cappuccino",
        price: Money::from_cents(2500),
        water: Quantity::from_units(30),
        coffee: Quantity::from_units(18),
        milk: Quantity::from_units(120),
        description: "Equal parts espresso, steamed milk, and milk foam",
    },
    DrinkRecipe {
        name: "Latte",
        price: Money::from_cents(2500),
        water: Quantity::from_units(30),
        coffee: Quantity::from_units(18),
        milk: Quantity::from_units(150),
        description: "Espresso with steamed milk and a small layer of milk foam",
    },
    DrinkRecipe {
        name: "Mocha",
        price: Money::from_cents(3000),
        water: Quantity::from_units(30),
        coffee: Quantity::from_units(18),
        milk: Quantity::from_units(150),
        description: "Espresso with chocolate, steamed milk and milk foam",
    },
];

impl Drink {
    /// All drinks on the menu.
    pub const ALL: [Drink; 5] = [
        Drink::Espresso,
        Drink::Americano,
        Drink::Cappuccino,
        Drink::Latte,
        Drink::Mocha,
    ];

    /// Resolves this drink's recipe.
    #[inline]
    pub fn recipe(&self) -> &'static DrinkRecipe {
        &RECIPES[*self as usize]
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.recipe().name
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Size
// =============================================================================

/// Cup size; scales both the price and the recipe quantities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// All sizes.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Multiplier in percent: 80 / 100 / 120.
    #[inline]
    pub const fn multiplier_pct(&self) -> u32 {
        match self {
            Size::Small => 80,
            Size::Medium => 100,
            Size::Large => 120,
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Extra
// =============================================================================

/// An optional add-on with a flat price and a fixed resource cost.
///
/// ## Not Scaled By Size
/// An extra's cost is independent of the cup size: an extra shot is 18 g
/// of beans whether the cup is Small or Large.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Extra {
    ExtraShot,
    CaramelSyrup,
    VanillaSyrup,
    ChocolateSauce,
    WhippedCream,
}

impl Extra {
    /// All extras.
    pub const ALL: [Extra; 5] = [
        Extra::ExtraShot,
        Extra::CaramelSyrup,
        Extra::VanillaSyrup,
        Extra::ChocolateSauce,
        Extra::WhippedCream,
    ];

    /// Flat price added to the drink.
    pub const fn price(&self) -> Money {
        match self {
            Extra::ExtraShot => Money::from_cents(500),
            Extra::CaramelSyrup | Extra::VanillaSyrup | Extra::ChocolateSauce => {
                Money::from_cents(300)
            }
            Extra::WhippedCream => Money::from_cents(200),
        }
    }

    /// The resource this extra consumes, and how much.
    pub const fn cost(&self) -> (Resource, Quantity) {
        match self {
            Extra::ExtraShot => (Resource::CoffeeBeans, Quantity::from_units(18)),
            Extra::CaramelSyrup => (Resource::CaramelSyrup, Quantity::from_units(30)),
            Extra::VanillaSyrup => (Resource::VanillaSyrup, Quantity::from_units(30)),
            Extra::ChocolateSauce => (Resource::ChocolateSauce, Quantity::from_units(30)),
            Extra::WhippedCream => (Resource::WhippedCream, Quantity::from_units(30)),
        }
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Extra::ExtraShot => "Extra Shot",
            Extra::CaramelSyrup => "Caramel Syrup",
            Extra::VanillaSyrup => "Vanilla Syrup",
            Extra::ChocolateSauce => "Chocolate Sauce",
            Extra::WhippedCream => "Whipped Cream",
        }
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Daily Specials
// =============================================================================

/// What a day's discount applies to.
///
/// Target names come from the promotional calendar, not the menu; a named
/// target that matches no menu drink simply never discounts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SpecialTarget {
    /// Every drink on the menu is discounted.
    AllDrinks,
    /// Only the drink with this display name is discounted.
    Named(&'static str),
}

/// One weekday's special offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct DailySpecial {
    pub target: SpecialTarget,
    /// Discount in whole percent.
    pub discount_pct: u32,
}

impl DailySpecial {
    /// Whether this special discounts the given drink.
    pub fn applies_to(&self, drink: Drink) -> bool {
        match self.target {
            SpecialTarget::AllDrinks => true,
            SpecialTarget::Named(name) => name == drink.name(),
        }
    }
}

/// Looks up the special for a weekday. One fixed entry per day.
pub const fn daily_special(weekday: Weekday) -> DailySpecial {
    match weekday {
        Weekday::Mon => DailySpecial {
            target: SpecialTarget::Named("Caramel Latte"),
            discount_pct: 20,
        },
        Weekday::Tue => DailySpecial {
            target: SpecialTarget::Named("Mocha"),
            discount_pct: 15,
        },
        Weekday::Wed => DailySpecial {
            target: SpecialTarget::Named("Cappuccino"),
            discount_pct: 20,
        },
        Weekday::Thu => DailySpecial {
            target: SpecialTarget::Named("Vanilla Latte"),
            discount_pct: 15,
        },
        Weekday::Fri => DailySpecial {
            target: SpecialTarget::Named("Espresso"),
            discount_pct: 25,
        },
        Weekday::Sat => DailySpecial {
            target: SpecialTarget::Named("Americano"),
            discount_pct: 20,
        },
        Weekday::Sun => DailySpecial {
            target: SpecialTarget::AllDrinks,
            discount_pct: 10,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
