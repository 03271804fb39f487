//! Simulation observer trait.

use ab_core::{PassengerId, Tick};

use crate::TickMetrics;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points of a run.
///
/// Every method has a no-op default.
///
/// ```rust,ignore
/// struct SeatedPrinter;
///
/// impl SimObserver for SeatedPrinter {
///     fn on_passenger_seated(&mut self, tick: Tick, passenger: PassengerId) {
///         println!("{tick}: {passenger} seated");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before any passenger is activated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// After every passenger has been activated and metrics recorded.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &TickMetrics) {}

    fn on_passenger_seated(&mut self, _tick: Tick, _passenger: PassengerId) {}

    /// Once, when the run completes or is abandoned at `max_ticks`.
    fn on_run_end(&mut self, _final_tick: Tick, _completed: bool) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
