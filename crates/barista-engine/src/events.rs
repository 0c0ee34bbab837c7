//! # Machine Events
//!
//! The observer seam between the engine and whatever renders it.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Event Flow                                      │
//! │                                                                         │
//! │  CoffeeMachine ──► emit_balance / emit_resource_level / emit_order     │
//! │  Brew task     ──► emit_brew_status (one per staged step)              │
//! │  Clock timer   ──► emit_clock ("14:32:07")                             │
//! │  Tip timer     ──► emit_tip                                            │
//! │  Rejections    ──► emit_warning (same text as the returned error)      │
//! │                                                                         │
//! │  The consumer implements MachineEventEmitter; the engine never knows   │
//! │  whether that is a GUI, a console, or a test recorder.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emitters are called outside the machine lock, so an implementation may
//! call back into the machine (e.g. to take a snapshot) without deadlock.

use barista_core::menu::Resource;
use barista_core::money::Money;
use barista_core::order::OrderRecord;
use barista_core::quantity::Quantity;

/// Trait for observing machine events (implemented by the shell).
pub trait MachineEventEmitter: Send + Sync {
    /// Emits the new balance after funds were added or debited.
    fn emit_balance(&self, balance: Money);

    /// Emits a resource's new level after a consume or refill.
    fn emit_resource_level(&self, resource: Resource, level: Quantity);

    /// Emits a brew status text (one per staged step, plus idle).
    fn emit_brew_status(&self, status: &str);

    /// Emits the formatted wall-clock time.
    fn emit_clock(&self, time_text: &str);

    /// Emits the current coffee tip.
    fn emit_tip(&self, tip: &str);

    /// Emits a committed order record.
    fn emit_order(&self, order: &OrderRecord);

    /// Emits a rejection warning message.
    fn emit_warning(&self, message: &str);
}

/// No-op event emitter for testing and headless use.
pub struct NoOpEmitter;

impl MachineEventEmitter for NoOpEmitter {
    fn emit_balance(&self, _balance: Money) {}
    fn emit_resource_level(&self, _resource: Resource, _level: Quantity) {}
    fn emit_brew_status(&self, _status: &str) {}
    fn emit_clock(&self, _time_text: &str) {}
    fn emit_tip(&self, _tip: &str) {}
    fn emit_order(&self, _order: &OrderRecord) {}
    fn emit_warning(&self, _message: &str) {}
}
