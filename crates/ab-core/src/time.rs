//! Ticks and the tick-to-seconds clock.
//!
//! A tick is one activation of every passenger.  The reference cabin model
//! steps twice per simulated second, so a tick is 500 ms unless configured
//! otherwise.  Seconds appear only in reported results.

use std::fmt;

/// Tick index, counted from 0 at the start of boarding.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// The run's current tick and how long a tick lasts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub tick_duration_ms: u32,
    /// Next tick to be processed.
    pub current_tick:     Tick,
}

impl SimClock {
    pub const DEFAULT_TICK_MS: u32 = 500;

    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::default() }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    pub fn secs_for_ticks(&self, ticks: u64) -> f64 {
        ticks as f64 * self.tick_duration_ms as f64 / 1_000.0
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICK_MS)
    }
}

impl fmt::Display for SimClock {
    /// `T75 (1m15.0s)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.secs_for_ticks(self.current_tick.0);
        let minutes = (secs / 60.0).floor();
        write!(f, "{} ({}m{:04.1}s)", self.current_tick, minutes as u64, secs - minutes * 60.0)
    }
}
