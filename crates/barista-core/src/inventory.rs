//! # Inventory Store
//!
//! Mutable consumable levels and the resource-sufficiency rules for one
//! brew.
//!
//! ## Check/Consume Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  demand(drink, size, extras)  ← ONE formula, used by BOTH paths        │
//! │       │                                                                 │
//! │       ├──► check_sufficiency: compare demand vs levels (read-only)      │
//! │       │         │                                                       │
//! │       │         ▼  empty result, still under the machine lock          │
//! │       └──► consume: subtract exactly the same demand                    │
//! │                                                                         │
//! │  Because both paths read the same aggregated demand, a check that      │
//! │  passes can never be overdrawn by its own consume.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `consume` performs no bounds re-check of its own. The caller must hold
//! the machine lock across check-then-consume; this crate only guarantees
//! the two use identical arithmetic.

use serde::Serialize;
use ts_rs::TS;

use crate::menu::{Drink, Extra, Resource, Size};
use crate::quantity::Quantity;

/// The requirement one brew places on a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    pub resource: Resource,
    pub amount: Quantity,
}

/// Computes the aggregated per-resource demand of one brew.
///
/// ## Formulas
/// - water = recipe.water × size multiplier
/// - coffee = recipe.coffee × size multiplier
/// - milk = recipe.milk × size multiplier, only when the recipe uses milk
/// - each selected extra adds its fixed cost to its resource, unscaled
///
/// Demands on the same resource are summed (an Espresso with an Extra Shot
/// needs 36 g of beans, not two independent 18 g claims), and resources
/// with zero demand are omitted. Entries come back in `Resource::ALL`
/// order.
pub fn demand(drink: Drink, size: Size, extras: &[Extra]) -> Vec<Demand> {
    let recipe = drink.recipe();
    let pct = size.multiplier_pct();

    let mut required = [Quantity::zero(); Resource::COUNT];
    required[Resource::Water.index()] += recipe.water.scaled(pct);
    required[Resource::CoffeeBeans.index()] += recipe.coffee.scaled(pct);
    if recipe.uses_milk() {
        required[Resource::Milk.index()] += recipe.milk.scaled(pct);
    }

    for extra in extras {
        let (resource, amount) = extra.cost();
        required[resource.index()] += amount;
    }

    Resource::ALL
        .iter()
        .filter(|r| !required[r.index()].is_zero())
        .map(|r| Demand {
            resource: *r,
            amount: required[r.index()],
        })
        .collect()
}

// =============================================================================
// Inventory Store
// =============================================================================

/// Current level of every tracked resource.
///
/// ## Invariants
/// - Levels never go negative: `consume` is only called after an empty
///   `check_sufficiency` under the same lock.
/// - Levels only decrease via `consume` and reset via `refill`; there is
///   no partial top-up.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    levels: [Quantity; Resource::COUNT],
}

/// One resource's level in a snapshot, with its capacity for gauge math.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLevel {
    pub resource: Resource,
    pub level: Quantity,
    pub capacity: Quantity,
}

impl InventoryStore {
    /// Creates a store with every resource at full capacity.
    pub fn full() -> Self {
        let mut levels = [Quantity::zero(); Resource::COUNT];
        for resource in Resource::ALL {
            levels[resource.index()] = resource.capacity();
        }
        InventoryStore { levels }
    }

    /// Current level of a resource.
    #[inline]
    pub fn level(&self, resource: Resource) -> Quantity {
        self.levels[resource.index()]
    }

    /// Resets a resource to its full-capacity constant and returns the new
    /// level. Works from any prior level, including already-full.
    pub fn refill(&mut self, resource: Resource) -> Quantity {
        self.levels[resource.index()] = resource.capacity();
        self.levels[resource.index()]
    }

    /// Returns the resources whose level cannot cover the brew's demand.
    ///
    /// Empty result = sufficient. Never mutates. Results are in stable
    /// `Resource::ALL` order so warnings read the same every time.
    pub fn check_sufficiency(&self, drink: Drink, size: Size, extras: &[Extra]) -> Vec<Resource> {
        demand(drink, size, extras)
            .into_iter()
            .filter(|d| self.level(d.resource) < d.amount)
            .map(|d| d.resource)
            .collect()
    }

    /// Subtracts the brew's demand from the levels.
    ///
    /// Must only be called after `check_sufficiency` returned empty, under
    /// the same exclusive lock; there is no bounds re-check here.
    pub fn consume(&mut self, drink: Drink, size: Size, extras: &[Extra]) {
        for d in demand(drink, size, extras) {
            self.levels[d.resource.index()] -= d.amount;
        }
    }

    /// All levels with capacities, for snapshots.
    pub fn levels(&self) -> Vec<ResourceLevel> {
        Resource::ALL
            .iter()
            .map(|r| ResourceLevel {
                resource: *r,
                level: self.level(*r),
                capacity: r.capacity(),
            })
            .collect()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::full()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
