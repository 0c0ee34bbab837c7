//! # Barista Console Shell
//!
//! Thin console front for the brew engine: wires logging, configuration,
//! an event observer, and the background timers, then drives one scripted
//! transaction so the whole engine can be watched end to end.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • machine.toml from the platform config dir, if present             │
//! │     • BARISTA_* environment overrides                                   │
//! │                                                                         │
//! │  3. Build Machine & Observer ─────────────────────────────────────────► │
//! │     • CoffeeMachine with a log-emitting observer                        │
//! │                                                                         │
//! │  4. Start Background Timers ──────────────────────────────────────────► │
//! │     • Clock tick and tip rotation                                       │
//! │                                                                         │
//! │  5. Run the scripted session, print the snapshot, shut down             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use barista_core::menu::{Drink, Extra, Resource, Size};
use barista_core::money::Money;
use barista_core::order::{BrewRequest, OrderRecord};
use barista_core::quantity::Quantity;
use barista_engine::{BackgroundTimers, CoffeeMachine, MachineConfig, MachineEventEmitter};

/// Observer that renders every machine event as a log line.
///
/// A graphical shell would update widgets here instead; the engine does
/// not care which it gets.
struct LogEmitter;

impl MachineEventEmitter for LogEmitter {
    fn emit_balance(&self, balance: Money) {
        info!(%balance, "Balance changed");
    }

    fn emit_resource_level(&self, resource: Resource, level: Quantity) {
        info!(%resource, %level, "Resource level changed");
    }

    fn emit_brew_status(&self, status: &str) {
        info!(status, "Brew status");
    }

    fn emit_clock(&self, time_text: &str) {
        tracing::debug!(time_text, "Clock tick");
    }

    fn emit_tip(&self, tip: &str) {
        info!(tip, "Coffee tip");
    }

    fn emit_order(&self, order: &OrderRecord) {
        info!(order_id = %order.id, drink = %order.drink, "Order recorded");
    }

    fn emit_warning(&self, message: &str) {
        tracing::warn!(message, "Warning");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Barista console");

    // Configuration: machine.toml + BARISTA_* overrides + defaults
    let config = MachineConfig::load_or_default(None);
    info!(
        temperature = config.machine.temperature,
        "Configuration loaded"
    );

    let machine = CoffeeMachine::with_emitter(&config, Arc::new(LogEmitter));
    let timers = BackgroundTimers::spawn(machine.clone(), &config);

    // A short scripted session: pay, order, watch the brew finish.
    machine.add_funds(Money::from_major_minor(30, 0))?;

    let request = BrewRequest {
        drink: Some(Drink::Cappuccino),
        size: Size::Medium,
        extras: vec![Extra::WhippedCream],
        customer_name: "Walk-in".into(),
        table_number: "1".into(),
        notes: "extra hot".into(),
    };
    let receipt = machine.place_order(request)?;
    info!(
        charged = %receipt.order.charged(),
        balance = %receipt.balance(),
        "Order accepted"
    );

    // Cappuccino with extras runs 16 s; wait it out, then one more tick
    tokio::time::sleep(Duration::from_secs(17)).await;

    let snapshot = machine.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    timers.shutdown().await;
    info!("Barista console stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (including clock ticks)
/// - `RUST_LOG=barista_engine=trace` - Trace the engine only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,barista_engine=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
