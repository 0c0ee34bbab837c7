//! # Brew Sequence
//!
//! The staged, timed sequence that runs after an order commits.
//!
//! ## Step Plan
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Staged Brew Sequence                                │
//! │                                                                         │
//! │  start 1s ─► grind 2s ─► heat water 2s ─► espresso 2s                   │
//! │                                              │                          │
//! │              milk drinks only ┌──────────────┘                          │
//! │                               ▼                                         │
//! │                      heat milk 2s ─► froth milk 2s                      │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                    prepare <drink> 2s ─► [add extras 1s] ─► ready 2s    │
//! │                                                                         │
//! │  Total: 11 s (black) … 16 s (milk drink with extras)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plan is built by conditional appends; there are no placeholder
//! steps to filter out. Each step publishes its status text, then sleeps
//! its duration; steps are never skipped or reordered, and the sequence
//! always runs to completion once committed (no cancellation).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use barista_core::menu::Drink;

use crate::events::MachineEventEmitter;
use crate::machine::MachineState;

/// Status text published when no brew is in progress.
pub const READY_STATUS: &str = "Coffee machine ready";

// =============================================================================
// Brew Phase
// =============================================================================

/// The brewing state machine: `Idle` ⇄ `Brewing`, nothing else.
///
/// There is exactly one brewing slot system-wide; `start_brewing` rejects
/// while the phase is `Brewing` and the sequence task flips it back to
/// `Idle` when the final step completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrewPhase {
    #[default]
    Idle,
    Brewing,
}

// =============================================================================
// Brew Plan
// =============================================================================

/// One step of the staged sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewStep {
    /// Status text published when the step begins.
    pub status: String,

    /// How long the step takes.
    pub duration: Duration,
}

impl BrewStep {
    fn new(status: impl Into<String>, secs: u64) -> Self {
        BrewStep {
            status: status.into(),
            duration: Duration::from_secs(secs),
        }
    }
}

/// The ordered list of steps for one brew, fixed at commit time.
#[derive(Debug, Clone)]
pub struct BrewPlan {
    steps: Vec<BrewStep>,
}

impl BrewPlan {
    /// Builds the plan for a committed order.
    ///
    /// Milk heating/frothing appear only for drinks whose recipe uses
    /// milk; the extras step appears only when at least one extra was
    /// selected. The temperature is read once here, at brew start.
    pub fn build(drink: Drink, temperature: u32, has_extras: bool) -> Self {
        let recipe = drink.recipe();
        let mut steps = Vec::with_capacity(9);

        steps.push(BrewStep::new("Starting to prepare your coffee...", 1));
        steps.push(BrewStep::new("Grinding coffee beans...", 2));
        steps.push(BrewStep::new(
            format!("Heating water to {temperature}°C..."),
            2,
        ));
        steps.push(BrewStep::new("Preparing espresso...", 2));

        if recipe.uses_milk() {
            steps.push(BrewStep::new("Heating milk...", 2));
            steps.push(BrewStep::new("Frothing milk...", 2));
        }

        steps.push(BrewStep::new(format!("Preparing {}...", recipe.name), 2));

        if has_extras {
            steps.push(BrewStep::new("Adding extras...", 1));
        }

        steps.push(BrewStep::new("Your coffee is ready! Enjoy!", 2));

        BrewPlan { steps }
    }

    /// The steps, in execution order.
    pub fn steps(&self) -> &[BrewStep] {
        &self.steps
    }

    /// Wall-clock length of the whole sequence.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

// =============================================================================
// Sequence Runner
// =============================================================================

/// Runs a committed brew to completion on the current task.
///
/// Publishes each step's status, sleeps its duration, then returns the
/// machine to `Idle` and publishes the ready status. The machine lock is
/// held only for the text/phase updates, never across a sleep.
pub(crate) async fn run_sequence(
    state: Arc<Mutex<MachineState>>,
    emitter: Arc<dyn MachineEventEmitter>,
    plan: BrewPlan,
) {
    for step in plan.steps() {
        {
            let mut machine = state.lock().expect("machine mutex poisoned");
            machine.status_text = step.status.clone();
        }
        emitter.emit_brew_status(&step.status);
        debug!(status = %step.status, "Brew step");

        sleep(step.duration).await;
    }

    {
        let mut machine = state.lock().expect("machine mutex poisoned");
        machine.phase = BrewPhase::Idle;
        machine.status_text = READY_STATUS.to_string();
    }
    emitter.emit_brew_status(READY_STATUS);
    info!("Brew complete");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(plan: &BrewPlan) -> Vec<&str> {
        plan.steps().iter().map(|s| s.status.as_str()).collect()
    }

    #[test]
    fn test_black_drink_skips_milk_steps() {
        let plan = BrewPlan::build(Drink::Espresso, 90, false);
        assert_eq!(
            statuses(&plan),
            vec![
                "Starting to prepare your coffee...",
                "Grinding coffee beans...",
                "Heating water to 90°C...",
                "Preparing espresso...",
                "Preparing Espresso...",
                "Your coffee is ready! Enjoy!",
            ]
        );
        assert_eq!(plan.total_duration(), Duration::from_secs(11));
    }

    #[test]
    fn test_milk_drink_heats_and_froths() {
        let plan = BrewPlan::build(Drink::Cappuccino, 90, false);
        let steps = statuses(&plan);
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[4], "Heating milk...");
        assert_eq!(steps[5], "Frothing milk...");
        assert_eq!(steps[6], "Preparing Cappuccino...");
        assert_eq!(plan.total_duration(), Duration::from_secs(15));
    }

    #[test]
    fn test_extras_step_only_when_selected() {
        let without = BrewPlan::build(Drink::Mocha, 90, false);
        assert!(!statuses(&without).contains(&"Adding extras..."));

        let with = BrewPlan::build(Drink::Mocha, 90, true);
        let steps = statuses(&with);
        assert_eq!(steps.len(), 9);
        // Extras go in after the drink is prepared, before ready
        assert_eq!(steps[7], "Adding extras...");
        assert_eq!(with.total_duration(), Duration::from_secs(16));
    }

    #[test]
    fn test_temperature_appears_in_heat_step() {
        let plan = BrewPlan::build(Drink::Americano, 72, false);
        assert_eq!(plan.steps()[2].status, "Heating water to 72°C...");
    }
}
