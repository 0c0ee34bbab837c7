//! # Coffee Machine Aggregate
//!
//! The single process-wide state aggregate and the order/brew transaction
//! path.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Mutual-Exclusion Domain                          │
//! │                                                                         │
//! │  CoffeeMachine                                                          │
//! │  └── Arc<Mutex<MachineState>>                                           │
//! │        inventory • balance • ledger • stats • phase • temperature       │
//! │        status/clock/tip texts                                           │
//! │                                                                         │
//! │  start_brewing holds the lock across validate-and-commit (steps 1-5),   │
//! │  so two concurrent orders can never both pass the sufficiency check     │
//! │  against the same limited stock. add_funds / refill / set_temperature   │
//! │  take the same lock; the brew task and timers lock only to publish      │
//! │  short text updates and never across a sleep.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transaction Flow
//! ```text
//! place_order ──► order form checks (name, table)
//!      │
//! start_brewing ──► 1 brew slot free?  2 drink chosen?  3 funds?  4 stock?
//!      │
//!      ▼ commit (atomic under the lock)
//! debit balance • consume inventory • record sale • append ledger • Brewing
//!      │
//!      ▼ returns immediately with the receipt
//! spawned Tokio task runs the staged sequence, then flips back to Idle
//! ```
//!
//! Rejections mutate nothing and are mirrored to observers as warnings.

use std::sync::{Arc, Mutex};

use chrono::{Datelike, Local, Weekday};
use serde::Serialize;
use tracing::{debug, info, warn};

use barista_core::inventory::{demand, InventoryStore, ResourceLevel};
use barista_core::menu::Resource;
use barista_core::order::DrinkTally;
use barista_core::pricing::discounted_price;
use barista_core::validation::{validate_deposit, validate_order_form, validate_temperature};
use barista_core::{
    BrewError, BrewRequest, BrewResult, Money, OrderLedger, OrderRecord, Quantity, SalesStats,
    ValidationError,
};

use crate::brew::{self, BrewPhase, BrewPlan, READY_STATUS};
use crate::config::MachineConfig;
use crate::events::{MachineEventEmitter, NoOpEmitter};

// =============================================================================
// Machine State
// =============================================================================

/// Everything mutable, behind the one machine lock.
///
/// Created at startup and lives for the process lifetime; there is no
/// teardown beyond process exit and no persistence.
pub(crate) struct MachineState {
    pub(crate) inventory: InventoryStore,
    pub(crate) balance: Money,
    pub(crate) ledger: OrderLedger,
    pub(crate) stats: SalesStats,
    pub(crate) phase: BrewPhase,
    pub(crate) temperature: u32,
    pub(crate) status_text: String,
    pub(crate) clock_text: String,
    pub(crate) tip_text: String,
}

// =============================================================================
// DTOs
// =============================================================================

/// What the caller gets back from an accepted order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// The committed order, exactly as recorded in the ledger.
    pub order: OrderRecord,

    /// Balance in cents after the debit.
    pub balance_cents: i64,
}

impl OrderReceipt {
    /// Returns the remaining balance as Money.
    #[inline]
    pub fn balance(&self) -> Money {
        Money::from_cents(self.balance_cents)
    }
}

/// Point-in-time view of the whole machine, for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSnapshot {
    /// Every resource's level and capacity.
    pub resources: Vec<ResourceLevel>,

    /// Customer balance in cents.
    pub balance_cents: i64,

    /// Lifetime revenue in cents.
    pub total_sales_cents: i64,

    /// Lifetime units sold per drink.
    pub drinks_sold: Vec<DrinkTally>,

    /// Recent orders, newest first (at most 5).
    pub recent_orders: Vec<OrderRecord>,

    /// Current brew status text.
    pub status_text: String,

    /// Current coffee tip text.
    pub tip_text: String,

    /// Current wall-clock text (HH:MM:SS).
    pub clock_text: String,

    /// Configured brew temperature in °C.
    pub temperature: u32,

    /// Whether a brew is in progress.
    pub is_brewing: bool,
}

/// Everything a successful commit produces, gathered under the lock and
/// announced after it is released.
struct Committed {
    order: OrderRecord,
    balance: Money,
    levels: Vec<(Resource, Quantity)>,
    plan: BrewPlan,
}

// =============================================================================
// Coffee Machine
// =============================================================================

/// The coffee machine: one brewing slot, one lock, one event seam.
///
/// Cloning is cheap and shares the same state; hand clones to the timers
/// or any other task that needs access.
#[derive(Clone)]
pub struct CoffeeMachine {
    /// The single shared state aggregate.
    state: Arc<Mutex<MachineState>>,

    /// Event observer for the shell.
    emitter: Arc<dyn MachineEventEmitter>,
}

impl CoffeeMachine {
    /// Creates a machine with full inventory and no observer.
    pub fn new(config: &MachineConfig) -> Self {
        Self::with_emitter(config, Arc::new(NoOpEmitter))
    }

    /// Creates a machine with full inventory and a custom event emitter.
    pub fn with_emitter(config: &MachineConfig, emitter: Arc<dyn MachineEventEmitter>) -> Self {
        let state = MachineState {
            inventory: InventoryStore::full(),
            balance: Money::zero(),
            ledger: OrderLedger::new(),
            stats: SalesStats::new(),
            phase: BrewPhase::Idle,
            temperature: config.machine.temperature,
            status_text: READY_STATUS.to_string(),
            clock_text: "00:00:00".to_string(),
            tip_text: String::new(),
        };

        CoffeeMachine {
            state: Arc::new(Mutex::new(state)),
            emitter,
        }
    }

    // =========================================================================
    // Inbound Operations
    // =========================================================================

    /// Adds funds to the balance and returns the new balance.
    pub fn add_funds(&self, amount: Money) -> Result<Money, ValidationError> {
        validate_deposit(amount)?;

        let balance = {
            let mut state = self.lock();
            state.balance += amount;
            state.balance
        };

        self.emitter.emit_balance(balance);
        info!(added = %amount, balance = %balance, "Funds added");
        Ok(balance)
    }

    /// Refills a resource to its full-capacity constant and returns the
    /// new level.
    pub fn refill(&self, resource: Resource) -> Quantity {
        let level = {
            let mut state = self.lock();
            state.inventory.refill(resource)
        };

        self.emitter.emit_resource_level(resource, level);
        info!(resource = %resource, level = %level, "Resource refilled");
        level
    }

    /// Sets the brew temperature (°C, within [65, 95]).
    ///
    /// Read at the next brew start; it only changes the heat-water status
    /// text, never the shape of the sequence.
    pub fn set_temperature(&self, degrees: u32) -> Result<(), ValidationError> {
        validate_temperature(degrees)?;

        self.lock().temperature = degrees;
        debug!(degrees, "Temperature set");
        Ok(())
    }

    /// Places an order from the order form: checks the customer metadata,
    /// then starts the brew.
    pub fn place_order(&self, request: BrewRequest) -> BrewResult<OrderReceipt> {
        self.place_order_at(request, Local::now().weekday())
    }

    /// Starts a brew transaction directly (no order-form checks).
    ///
    /// Returns as soon as the commit lands; the staged sequence continues
    /// on a spawned task. Must be called from within a Tokio runtime.
    pub fn start_brewing(&self, request: BrewRequest) -> BrewResult<OrderReceipt> {
        self.start_brewing_at(request, Local::now().weekday())
    }

    /// Current snapshot of everything a renderer needs.
    pub fn snapshot(&self) -> MachineSnapshot {
        let state = self.lock();
        MachineSnapshot {
            resources: state.inventory.levels(),
            balance_cents: state.balance.cents(),
            total_sales_cents: state.stats.total().cents(),
            drinks_sold: state.stats.tallies(),
            recent_orders: state.ledger.recent().cloned().collect(),
            status_text: state.status_text.clone(),
            tip_text: state.tip_text.clone(),
            clock_text: state.clock_text.clone(),
            temperature: state.temperature,
            is_brewing: state.phase == BrewPhase::Brewing,
        }
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.lock().balance
    }

    /// Whether a brew is in progress right now.
    pub fn is_brewing(&self) -> bool {
        self.lock().phase == BrewPhase::Brewing
    }

    // =========================================================================
    // Transaction Internals
    // =========================================================================

    /// Order placement against an explicit weekday (the public entry point
    /// supplies today's).
    fn place_order_at(&self, request: BrewRequest, weekday: Weekday) -> BrewResult<OrderReceipt> {
        if let Err(err) = validate_order_form(&request) {
            warn!(%err, "Order rejected");
            self.emitter.emit_warning(&err.to_string());
            return Err(err);
        }

        self.start_brewing_at(request, weekday)
    }

    /// The brew transaction against an explicit weekday.
    fn start_brewing_at(&self, request: BrewRequest, weekday: Weekday) -> BrewResult<OrderReceipt> {
        // Steps 1-5 are atomic with respect to every other consume/refill:
        // the lock spans the whole validate-and-commit sequence.
        let result = {
            let mut state = self.lock();
            Self::commit_order(&mut state, &request, weekday)
        };

        let committed = match result {
            Ok(committed) => committed,
            Err(err) => {
                warn!(%err, "Order rejected");
                self.emitter.emit_warning(&err.to_string());
                return Err(err);
            }
        };

        // Announce the commit outside the lock
        self.emitter.emit_balance(committed.balance);
        for (resource, level) in &committed.levels {
            self.emitter.emit_resource_level(*resource, *level);
        }
        self.emitter.emit_order(&committed.order);
        info!(
            order_id = %committed.order.id,
            drink = %committed.order.drink,
            charged = %committed.order.charged(),
            balance = %committed.balance,
            "Order committed"
        );

        // Step 6: the staged sequence runs off the caller's path
        tokio::spawn(brew::run_sequence(
            self.state.clone(),
            self.emitter.clone(),
            committed.plan,
        ));

        Ok(OrderReceipt {
            order: committed.order,
            balance_cents: committed.balance.cents(),
        })
    }

    /// Steps 1-5 of the transaction. Pure with respect to the lock: the
    /// caller already holds it, and a rejection leaves `state` untouched.
    fn commit_order(
        state: &mut MachineState,
        request: &BrewRequest,
        weekday: Weekday,
    ) -> BrewResult<Committed> {
        // 1. The single brewing slot
        if state.phase == BrewPhase::Brewing {
            return Err(BrewError::AlreadyBrewing);
        }

        // 2. A drink must be chosen
        let drink = request.drink.ok_or(BrewError::NoDrinkSelected)?;

        // 3. Funds against today's discounted price
        let price = discounted_price(drink, request.size, &request.extras, weekday);
        if state.balance < price {
            return Err(BrewError::InsufficientFunds {
                price,
                balance: state.balance,
            });
        }

        // 4. Resource sufficiency
        let failing = state
            .inventory
            .check_sufficiency(drink, request.size, &request.extras);
        if !failing.is_empty() {
            return Err(BrewError::InsufficientResource(failing));
        }

        // 5. Commit
        state.balance -= price;
        state.inventory.consume(drink, request.size, &request.extras);
        state.stats.record_sale(drink, price);
        let order = OrderRecord::from_request(request, drink, price);
        state.ledger.record(order.clone());
        state.phase = BrewPhase::Brewing;

        let levels = demand(drink, request.size, &request.extras)
            .into_iter()
            .map(|d| (d.resource, state.inventory.level(d.resource)))
            .collect();

        let plan = BrewPlan::build(drink, state.temperature, !request.extras.is_empty());

        Ok(Committed {
            order,
            balance: state.balance,
            levels,
            plan,
        })
    }

    // =========================================================================
    // Timer Callbacks
    // =========================================================================

    /// Stores and publishes a clock tick (called by the clock timer).
    pub(crate) fn update_clock(&self, time_text: String) {
        self.lock().clock_text = time_text.clone();
        self.emitter.emit_clock(&time_text);
    }

    /// Stores and publishes the next tip (called by the tip timer).
    pub(crate) fn update_tip(&self, tip: &str) {
        self.lock().tip_text = tip.to_string();
        self.emitter.emit_tip(tip);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MachineState> {
        self.state.lock().expect("machine mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use barista_core::menu::{Drink, Extra, Size};
    use std::time::Duration;

    /// Captures every emitted event as a tagged string, in order.
    #[derive(Default)]
    struct RecordingEmitter {
        events: Mutex<Vec<String>>,
    }

    impl RecordingEmitter {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl MachineEventEmitter for RecordingEmitter {
        fn emit_balance(&self, balance: Money) {
            self.push(format!("balance:{}", balance));
        }
        fn emit_resource_level(&self, resource: Resource, level: Quantity) {
            self.push(format!("level:{resource}:{level}"));
        }
        fn emit_brew_status(&self, status: &str) {
            self.push(format!("status:{status}"));
        }
        fn emit_clock(&self, time_text: &str) {
            self.push(format!("clock:{time_text}"));
        }
        fn emit_tip(&self, tip: &str) {
            self.push(format!("tip:{tip}"));
        }
        fn emit_order(&self, order: &OrderRecord) {
            self.push(format!("order:{}", order.drink));
        }
        fn emit_warning(&self, message: &str) {
            self.push(format!("warning:{message}"));
        }
    }

    fn machine() -> CoffeeMachine {
        CoffeeMachine::new(&MachineConfig::default())
    }

    fn espresso_request() -> BrewRequest {
        BrewRequest::for_drink(Drink::Espresso, Size::Medium, vec![])
    }

    fn level_of(machine: &CoffeeMachine, resource: Resource) -> Quantity {
        machine
            .snapshot()
            .resources
            .into_iter()
            .find(|r| r.resource == resource)
            .unwrap()
            .level
    }

    // Monday's special names a drink that is not on the menu, so every
    // menu drink pays full price.
    const NO_SPECIAL_DAY: Weekday = Weekday::Mon;

    #[tokio::test(start_paused = true)]
    async fn test_espresso_medium_commit_debits_and_consumes_exactly() {
        let m = machine();
        m.add_funds(Money::from_cents(2000)).unwrap();

        let receipt = m
            .start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();

        assert_eq!(receipt.order.charged().cents(), 1500);
        assert_eq!(receipt.balance().cents(), 500);
        assert!(m.is_brewing());

        assert_eq!(level_of(&m, Resource::Water).units(), 1970);
        assert_eq!(level_of(&m, Resource::CoffeeBeans).units(), 982);

        let snapshot = m.snapshot();
        assert_eq!(snapshot.total_sales_cents, 1500);
        assert_eq!(snapshot.recent_orders.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insufficient_funds_mutates_nothing() {
        let m = machine();
        m.add_funds(Money::from_cents(1000)).unwrap();

        let err = m
            .start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap_err();
        assert_eq!(
            err,
            BrewError::InsufficientFunds {
                price: Money::from_cents(1500),
                balance: Money::from_cents(1000),
            }
        );

        assert_eq!(m.balance().cents(), 1000);
        assert_eq!(level_of(&m, Resource::Water).units(), 2000);
        assert!(!m.is_brewing());
        assert!(m.snapshot().recent_orders.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_friday_special_discounts_the_charge() {
        let m = machine();
        m.add_funds(Money::from_cents(2000)).unwrap();

        let receipt = m
            .start_brewing_at(espresso_request(), Weekday::Fri)
            .unwrap();
        assert_eq!(receipt.order.charged().cents(), 1125);
        assert_eq!(receipt.balance().cents(), 875);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_drink_selected_is_rejected() {
        let m = machine();
        m.add_funds(Money::from_cents(2000)).unwrap();

        let request = BrewRequest::default();
        let err = m.start_brewing_at(request, NO_SPECIAL_DAY).unwrap_err();
        assert_eq!(err, BrewError::NoDrinkSelected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_brew_rejected_while_brewing() {
        let m = machine();
        m.add_funds(Money::from_cents(5000)).unwrap();

        m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();
        let err = m
            .start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap_err();
        assert_eq!(err, BrewError::AlreadyBrewing);

        // The rejection changed nothing: one order, one debit
        assert_eq!(m.balance().cents(), 3500);
        assert_eq!(m.snapshot().recent_orders.len(), 1);
        assert_eq!(level_of(&m, Resource::Water).units(), 1970);
    }

    #[tokio::test(start_paused = true)]
    async fn test_brew_returns_to_idle_and_accepts_again() {
        let m = machine();
        m.add_funds(Money::from_cents(5000)).unwrap();

        m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();
        assert!(m.is_brewing());

        // Espresso plan is 11 s; give it time to run out
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(!m.is_brewing());
        assert_eq!(m.snapshot().status_text, READY_STATUS);

        // The slot is free again
        m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();
        assert!(m.is_brewing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_statuses_published_in_order() {
        let emitter = Arc::new(RecordingEmitter::default());
        let m = CoffeeMachine::with_emitter(&MachineConfig::default(), emitter.clone());
        m.add_funds(Money::from_cents(5000)).unwrap();

        let request = BrewRequest::for_drink(
            Drink::Cappuccino,
            Size::Medium,
            vec![Extra::WhippedCream],
        );
        m.start_brewing_at(request, NO_SPECIAL_DAY).unwrap();

        tokio::time::sleep(Duration::from_secs(30)).await;

        let statuses: Vec<String> = emitter
            .events()
            .into_iter()
            .filter(|e| e.starts_with("status:"))
            .collect();
        assert_eq!(
            statuses,
            vec![
                "status:Starting to prepare your coffee...",
                "status:Grinding coffee beans...",
                "status:Heating water to 90°C...",
                "status:Preparing espresso...",
                "status:Heating milk...",
                "status:Frothing milk...",
                "status:Preparing Cappuccino...",
                "status:Adding extras...",
                "status:Your coffee is ready! Enjoy!",
                "status:Coffee machine ready",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_is_mirrored_as_warning() {
        let emitter = Arc::new(RecordingEmitter::default());
        let m = CoffeeMachine::with_emitter(&MachineConfig::default(), emitter.clone());

        let _ = m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY);

        let events = emitter.events();
        assert!(events
            .iter()
            .any(|e| e.starts_with("warning:insufficient balance")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_requires_name_and_table() {
        let m = machine();
        m.add_funds(Money::from_cents(2000)).unwrap();

        let err = m
            .place_order_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap_err();
        assert_eq!(err, BrewError::NoCustomerName);

        let mut request = espresso_request();
        request.customer_name = "Ada".into();
        let err = m.place_order_at(request, NO_SPECIAL_DAY).unwrap_err();
        assert_eq!(err, BrewError::NoTableNumber);

        let mut request = espresso_request();
        request.customer_name = "Ada".into();
        request.table_number = "4".into();
        let receipt = m.place_order_at(request, NO_SPECIAL_DAY).unwrap();
        assert_eq!(receipt.order.customer_name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_orders_exactly_one_succeeds() {
        let m = machine();
        m.add_funds(Money::from_cents(10000)).unwrap();

        let a = {
            let m = m.clone();
            tokio::spawn(async move { m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY) })
        };
        let b = {
            let m = m.clone();
            tokio::spawn(async move { m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY) })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        // Exactly one debit and one consumption happened
        assert_eq!(m.balance().cents(), 8500);
        assert_eq!(level_of(&m, Resource::Water).units(), 1970);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_funds_rejects_non_positive_amounts() {
        let m = machine();
        assert!(m.add_funds(Money::zero()).is_err());
        assert!(m.add_funds(Money::from_cents(-500)).is_err());
        assert_eq!(m.balance(), Money::zero());

        assert_eq!(m.add_funds(Money::from_cents(500)).unwrap().cents(), 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refill_restores_capacity_and_temperature_is_bounded() {
        let m = machine();
        m.add_funds(Money::from_cents(2000)).unwrap();
        m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();

        assert_eq!(m.refill(Resource::Water).units(), 2000);
        assert_eq!(level_of(&m, Resource::Water).units(), 2000);

        assert!(m.set_temperature(64).is_err());
        assert!(m.set_temperature(85).is_ok());
        assert_eq!(m.snapshot().temperature, 85);
    }

    #[tokio::test(start_paused = true)]
    async fn test_temperature_read_at_brew_start() {
        let emitter = Arc::new(RecordingEmitter::default());
        let m = CoffeeMachine::with_emitter(&MachineConfig::default(), emitter.clone());
        m.add_funds(Money::from_cents(2000)).unwrap();
        m.set_temperature(72).unwrap();

        m.start_brewing_at(espresso_request(), NO_SPECIAL_DAY)
            .unwrap();
        tokio::time::sleep(Duration::from_secs(20)).await;

        assert!(emitter
            .events()
            .contains(&"status:Heating water to 72°C...".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ledger_keeps_five_newest_orders() {
        let m = machine();
        m.add_funds(Money::from_cents(20000)).unwrap();

        for n in 1..=6 {
            let mut request = espresso_request();
            request.notes = format!("order {n}");
            m.start_brewing_at(request, NO_SPECIAL_DAY).unwrap();
            tokio::time::sleep(Duration::from_secs(20)).await;
        }

        let snapshot = m.snapshot();
        assert_eq!(snapshot.recent_orders.len(), 5);
        assert_eq!(snapshot.recent_orders[0].notes, "order 6");
        assert!(snapshot.recent_orders.iter().all(|o| o.notes != "order 1"));
        // Lifetime stats kept counting past the ledger cap
        assert_eq!(snapshot.total_sales_cents, 9000);
    }
}
