//! # barista-engine: Brew Engine for the Barista Coffee Machine
//!
//! This crate turns the pure rules of `barista-core` into a running
//! machine: one shared state aggregate, a single-slot brewing state
//! machine with a staged timed sequence, two background timers, an
//! observer seam for the shell, and the configuration layer.
//!
//! ## Engine Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Engine Architecture                         │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 CoffeeMachine (machine.rs)                       │  │
//! │  │                                                                  │  │
//! │  │  One Mutex around inventory, balance, ledger, stats, phase,      │  │
//! │  │  temperature and the status/clock/tip texts. Validate-and-commit │  │
//! │  │  holds the lock for the whole sequence.                          │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ Brew sequence  │  │ Clock timer    │  │ Tip rotation           │    │
//! │  │ (brew.rs)      │  │ (timers.rs)    │  │ (timers.rs)            │    │
//! │  │                │  │                │  │                        │    │
//! │  │ Spawned per    │  │ 1 s tick,      │  │ 10 s tick, circular,   │    │
//! │  │ commit, runs   │  │ HH:MM:SS       │  │ 8 fixed tips           │    │
//! │  │ to completion  │  │                │  │                        │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  EVENTS (events.rs, to the shell):                                     │
//! │  balance • resource level • brew status • clock • tip • order •        │
//! │  warning                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`machine`] - The `CoffeeMachine` aggregate and transaction path
//! - [`brew`] - Brew phase, step plan builder, sequence runner
//! - [`timers`] - Clock tick and tip rotation with shutdown handles
//! - [`events`] - The `MachineEventEmitter` observer trait
//! - [`config`] - TOML + environment configuration
//! - [`error`] - Engine error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barista_engine::{BackgroundTimers, CoffeeMachine, MachineConfig};
//! use barista_core::{BrewRequest, Drink, Money, Size};
//!
//! let config = MachineConfig::load_or_default(None);
//! let machine = CoffeeMachine::new(&config);
//! let timers = BackgroundTimers::spawn(machine.clone(), &config);
//!
//! machine.add_funds(Money::from_cents(2000))?;
//! let receipt = machine.start_brewing(BrewRequest::for_drink(
//!     Drink::Espresso,
//!     Size::Medium,
//!     vec![],
//! ))?;
//! println!("Charged {}, {} left", receipt.order.charged(), receipt.balance());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod brew;
pub mod config;
pub mod error;
pub mod events;
pub mod machine;
pub mod timers;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use brew::{BrewPhase, BrewPlan, READY_STATUS};
pub use config::MachineConfig;
pub use error::{EngineError, EngineResult};
pub use events::{MachineEventEmitter, NoOpEmitter};
pub use machine::{CoffeeMachine, MachineSnapshot, OrderReceipt};
pub use timers::{BackgroundTimers, TipRotation, COFFEE_TIPS};
