//! # Background Timers
//!
//! The two repeating activities that run for the process lifetime: the
//! wall-clock tick and the coffee-tip rotation.
//!
//! ## Timer Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Background Timers                                  │
//! │                                                                         │
//! │  BackgroundTimers::spawn(machine, &config)                              │
//! │        │                                                                │
//! │        ├── clock task: every 1 s ──► machine.update_clock("14:32:07")   │
//! │        │                                                                │
//! │        └── tip task: every 10 s ──► machine.update_tip(tips[n % 8])     │
//! │                                                                         │
//! │  Both are independent of each other and of the brew state, never        │
//! │  touch inventory/balance/ledger/stats, and never produce errors.        │
//! │  Each owns a shutdown channel; they are the only way these loops end.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::config::MachineConfig;
use crate::machine::CoffeeMachine;

/// The fixed tip list, rotated forever in order.
pub const COFFEE_TIPS: [&str; 8] = [
    "Fresh coffee beans produce the best flavor",
    "Ideal water temperature is 90-96°C",
    "Espresso should take 20-30 seconds to brew",
    "Steam milk between 60-70°C for best results",
    "Clean your coffee machine regularly",
    "Store beans in an airtight container",
    "Arabica beans are known for their smooth taste",
    "Try different roast levels to find your preference",
];

// =============================================================================
// Tip Rotation
// =============================================================================

/// Circular cursor over [`COFFEE_TIPS`].
///
/// The index only ever advances; it wraps after the last tip and never
/// restarts on its own.
#[derive(Debug, Default)]
pub struct TipRotation {
    index: usize,
}

impl TipRotation {
    /// Starts at the first tip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tip and advances the cursor.
    pub fn next(&mut self) -> &'static str {
        let tip = COFFEE_TIPS[self.index];
        self.index = (self.index + 1) % COFFEE_TIPS.len();
        tip
    }
}

// =============================================================================
// Timer Handles
// =============================================================================

/// Handle for stopping one running timer task.
pub struct TimerHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl TimerHandle {
    /// Signals the timer task to stop.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// The pair of process-lifetime timers, started once at init.
pub struct BackgroundTimers {
    clock: TimerHandle,
    tips: TimerHandle,
}

impl BackgroundTimers {
    /// Spawns both timer tasks against the given machine.
    ///
    /// Must be called from within a Tokio runtime. The returned handles
    /// are the only way to stop the loops (normally at shutdown).
    pub fn spawn(machine: CoffeeMachine, config: &MachineConfig) -> Self {
        let clock = Self::spawn_clock(
            machine.clone(),
            Duration::from_secs(config.timers.clock_interval_secs),
        );
        let tips = Self::spawn_tips(
            machine,
            Duration::from_secs(config.timers.tip_interval_secs),
        );

        BackgroundTimers { clock, tips }
    }

    /// Stops both timers.
    pub async fn shutdown(&self) {
        self.clock.shutdown().await;
        self.tips.shutdown().await;
    }

    /// The clock task: publish the local wall-clock time on every tick.
    fn spawn_clock(machine: CoffeeMachine, period: Duration) -> TimerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let time_text = Local::now().format("%H:%M:%S").to_string();
                        machine.update_clock(time_text);
                    }

                    _ = shutdown_rx.recv() => {
                        info!("Clock timer stopped");
                        break;
                    }
                }
            }
        });

        TimerHandle { shutdown_tx }
    }

    /// The tip task: publish the next tip on every tick, starting with
    /// the first tip immediately.
    fn spawn_tips(machine: CoffeeMachine, period: Duration) -> TimerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut rotation = TipRotation::new();

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        machine.update_tip(rotation.next());
                    }

                    _ = shutdown_rx.recv() => {
                        info!("Tip timer stopped");
                        break;
                    }
                }
            }
        });

        TimerHandle { shutdown_tx }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles_in_order() {
        let mut rotation = TipRotation::new();

        // Two full cycles: the nth call yields tips[(n-1) % 8]
        for n in 0..16 {
            assert_eq!(rotation.next(), COFFEE_TIPS[n % COFFEE_TIPS.len()]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tip_timer_advances_on_schedule() {
        let machine = CoffeeMachine::new(&MachineConfig::default());
        let timers = BackgroundTimers::spawn(machine.clone(), &MachineConfig::default());

        // First tick fires immediately with the first tip
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(machine.snapshot().tip_text, COFFEE_TIPS[0]);

        // Each 10 s period advances one tip
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(machine.snapshot().tip_text, COFFEE_TIPS[1]);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(machine.snapshot().tip_text, COFFEE_TIPS[3]);

        timers.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_timer_publishes_time_text() {
        let machine = CoffeeMachine::new(&MachineConfig::default());
        let timers = BackgroundTimers::spawn(machine.clone(), &MachineConfig::default());

        tokio::time::sleep(Duration::from_millis(1)).await;
        let clock_text = machine.snapshot().clock_text;
        // HH:MM:SS
        assert_eq!(clock_text.len(), 8);
        assert_eq!(clock_text.as_bytes()[2], b':');
        assert_eq!(clock_text.as_bytes()[5], b':');

        timers.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_stop_on_shutdown() {
        let machine = CoffeeMachine::new(&MachineConfig::default());
        let timers = BackgroundTimers::spawn(machine.clone(), &MachineConfig::default());

        tokio::time::sleep(Duration::from_millis(1)).await;
        timers.shutdown().await;
        // Let the shutdown land, then confirm the tip stops rotating
        tokio::time::sleep(Duration::from_millis(1)).await;
        let before = machine.snapshot().tip_text;

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(machine.snapshot().tip_text, before);
    }
}
