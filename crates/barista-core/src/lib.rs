//! # barista-core: Pure Business Logic for the Barista Coffee Machine
//!
//! This crate is the **heart** of the machine. It contains all business
//! logic as pure functions and plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (excluded consumer)                │   │
//! │  │    drink pickers ──► order form ──► gauges ──► status line      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calls + observed events                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    barista-engine                               │   │
//! │  │    CoffeeMachine, brew sequence, timers, config                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barista-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │ inventory │  │  pricing  │  │   │
//! │  │   │  Drinks   │  │ quantity  │  │  levels   │  │ discounts │  │   │
//! │  │   │  Extras   │  │  (fixed-  │  │  demand   │  │  specials │  │   │
//! │  │   │  Specials │  │   point)  │  │  refill   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOCKS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - The fixed catalog: drinks, sizes, extras, daily specials
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`quantity`] - Fixed-point inventory amounts (tenths of ml/g)
//! - [`pricing`] - Price and discount computation
//! - [`inventory`] - Resource levels, sufficiency checks, consumption
//! - [`order`] - Requests, order records, ledger, sales stats
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Timers, locks, file system access are FORBIDDEN here
//! 3. **Integer Arithmetic**: Money is cents (i64), quantities are tenths (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::menu::{Drink, Extra, Size};
//! use barista_core::pricing::discounted_price;
//! use chrono::Weekday;
//!
//! // Friday: Espresso is 25% off
//! let charge = discounted_price(Drink::Espresso, Size::Medium, &[], Weekday::Fri);
//! assert_eq!(charge.cents(), 1125); // $11.25
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod quantity;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use barista_core::Money` instead of
// `use barista_core::money::Money`

pub use error::{BrewError, BrewResult, ValidationError};
pub use inventory::InventoryStore;
pub use menu::{Drink, Extra, Resource, Size};
pub use money::Money;
pub use order::{BrewRequest, OrderLedger, OrderRecord, SalesStats};
pub use quantity::Quantity;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum orders retained in the recent-orders ledger.
///
/// ## Business Reason
/// The ledger is a display aid, not an audit log: the UI shows the last
/// handful of tickets and older ones scroll away. Lifetime totals live in
/// [`order::SalesStats`] instead.
pub const MAX_RECENT_ORDERS: usize = 5;

/// Lowest brew temperature the boiler supports (°C).
pub const TEMPERATURE_MIN: u32 = 65;

/// Highest brew temperature the boiler supports (°C).
pub const TEMPERATURE_MAX: u32 = 95;

/// Factory-default brew temperature (°C).
pub const DEFAULT_TEMPERATURE: u32 = 90;
