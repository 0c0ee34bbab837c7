//! # Orders and Sales
//!
//! The order request, the recorded-order ledger, and running sales
//! statistics.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BrewRequest (transient)                                                │
//! │    drink? size extras  +  customer metadata                             │
//! │       │                                                                 │
//! │       ▼  commit (validated, priced, resources consumed)                 │
//! │  OrderRecord (frozen)                                                   │
//! │    id, timestamp, charge: the snapshot of what was actually sold        │
//! │       │                                                                 │
//! │       ├──► OrderLedger   (last 5, newest first)                         │
//! │       └──► SalesStats    (total revenue, per-drink counts)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::menu::{Drink, Extra, Size};
use crate::money::Money;
use crate::MAX_RECENT_ORDERS;

// =============================================================================
// Brew Request
// =============================================================================

/// One order as submitted by the caller.
///
/// Lives only for the duration of a single `start_brewing` call. Customer
/// metadata is opaque to the engine beyond presence checks at the order
/// form; it is passed through to the record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BrewRequest {
    /// Selected drink; `None` when the caller submitted without choosing.
    pub drink: Option<Drink>,

    /// Cup size; defaults to Medium.
    pub size: Size,

    /// Selected extras, in selection order.
    pub extras: Vec<Extra>,

    /// Customer name from the order form.
    pub customer_name: String,

    /// Table number from the order form.
    pub table_number: String,

    /// Free-form order notes.
    pub notes: String,
}

impl BrewRequest {
    /// Convenience constructor for a drink with no metadata.
    pub fn for_drink(drink: Drink, size: Size, extras: Vec<Extra>) -> Self {
        BrewRequest {
            drink: Some(drink),
            size,
            extras,
            ..Default::default()
        }
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// A committed order, frozen at the moment it was charged.
///
/// Uses the snapshot pattern: the charge is stored on the record so later
/// menu or special changes never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the order was committed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Customer name as entered.
    pub customer_name: String,

    /// Table number as entered.
    pub table_number: String,

    /// The drink that was brewed.
    pub drink: Drink,

    /// The cup size.
    pub size: Size,

    /// Extras included in the charge.
    pub extras: Vec<Extra>,

    /// Free-form notes.
    pub notes: String,

    /// Final charge in cents (after size, extras, and special).
    pub charged_cents: i64,
}

impl OrderRecord {
    /// Builds a record from an accepted request and its computed charge.
    pub fn from_request(request: &BrewRequest, drink: Drink, charged: Money) -> Self {
        OrderRecord {
            id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            customer_name: request.customer_name.clone(),
            table_number: request.table_number.clone(),
            drink,
            size: request.size,
            extras: request.extras.clone(),
            notes: request.notes.clone(),
            charged_cents: charged.cents(),
        }
    }

    /// Returns the charge as Money.
    #[inline]
    pub fn charged(&self) -> Money {
        Money::from_cents(self.charged_cents)
    }
}

// =============================================================================
// Order Ledger
// =============================================================================

/// Bounded history of the most recent orders.
///
/// ## Invariants
/// - Holds at most [`MAX_RECENT_ORDERS`] records.
/// - Newest first; the oldest record is evicted on overflow.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    recent: VecDeque<OrderRecord>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger {
            recent: VecDeque::with_capacity(MAX_RECENT_ORDERS + 1),
        }
    }

    /// Records a committed order, evicting the oldest past the cap.
    pub fn record(&mut self, order: OrderRecord) {
        self.recent.push_front(order);
        self.recent.truncate(MAX_RECENT_ORDERS);
    }

    /// Recent orders, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &OrderRecord> {
        self.recent.iter()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Whether any order has been recorded.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

// =============================================================================
// Sales Stats
// =============================================================================

/// Running totals for the lifetime of the process.
///
/// Both the revenue total and every per-drink count are monotonically
/// non-decreasing; rejected orders never touch them.
#[derive(Debug, Clone, Default)]
pub struct SalesStats {
    total: Money,
    drinks_sold: BTreeMap<Drink, u64>,
}

/// One drink's lifetime sales, for snapshots.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DrinkTally {
    pub drink: Drink,
    pub units_sold: u64,
}

impl SalesStats {
    /// Creates empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one committed sale.
    pub fn record_sale(&mut self, drink: Drink, charged: Money) {
        self.total += charged;
        *self.drinks_sold.entry(drink).or_insert(0) += 1;
    }

    /// Total revenue across all committed sales.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Units sold of one drink.
    pub fn units_sold(&self, drink: Drink) -> u64 {
        self.drinks_sold.get(&drink).copied().unwrap_or(0)
    }

    /// Per-drink tallies for drinks that have sold at least once.
    pub fn tallies(&self) -> Vec<DrinkTally> {
        self.drinks_sold
            .iter()
            .map(|(drink, units)| DrinkTally {
                drink: *drink,
                units_sold: *units,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32) -> OrderRecord {
        let request = BrewRequest {
            drink: Some(Drink::Espresso),
            customer_name: format!("Customer {n}"),
            table_number: n.to_string(),
            ..Default::default()
        };
        OrderRecord::from_request(&request, Drink::Espresso, Money::from_cents(1500))
    }

    #[test]
    fn test_record_freezes_charge() {
        let order = record(1);
        assert_eq!(order.charged().cents(), 1500);
        assert_eq!(order.drink, Drink::Espresso);
        assert_eq!(order.size, Size::Medium);
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_ledger_newest_first() {
        let mut ledger = OrderLedger::new();
        ledger.record(record(1));
        ledger.record(record(2));

        let names: Vec<_> = ledger.recent().map(|o| o.customer_name.clone()).collect();
        assert_eq!(names, vec!["Customer 2", "Customer 1"]);
    }

    #[test]
    fn test_ledger_evicts_oldest_past_cap() {
        let mut ledger = OrderLedger::new();
        for n in 1..=6 {
            ledger.record(record(n));
        }

        assert_eq!(ledger.len(), MAX_RECENT_ORDERS);
        let names: Vec<_> = ledger.recent().map(|o| o.customer_name.clone()).collect();
        assert_eq!(names.first().unwrap(), "Customer 6");
        // "Customer 1" was evicted
        assert!(!names.contains(&"Customer 1".to_string()));
    }

    #[test]
    fn test_stats_accumulate() {
        let mut stats = SalesStats::new();
        stats.record_sale(Drink::Espresso, Money::from_cents(1500));
        stats.record_sale(Drink::Espresso, Money::from_cents(1125));
        stats.record_sale(Drink::Mocha, Money::from_cents(3000));

        assert_eq!(stats.total().cents(), 5625);
        assert_eq!(stats.units_sold(Drink::Espresso), 2);
        assert_eq!(stats.units_sold(Drink::Mocha), 1);
        assert_eq!(stats.units_sold(Drink::Latte), 0);
        assert_eq!(stats.tallies().len(), 2);
    }
}
