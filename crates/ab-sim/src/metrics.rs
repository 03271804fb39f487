//! Per-tick and per-run measurements.
//!
//! `MetricsCollector` only accumulates; it never feeds back into the
//! simulation.  Records are plain data so `ab-output` can turn them into
//! rows without depending on simulation internals.

use ab_core::{PassengerId, RunId, SimClock, Tick};
use ab_interference::ShuffleType;
use ab_passenger::PassengerStore;

// ── Records ───────────────────────────────────────────────────────────────────

/// Snapshot taken at the end of every tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickMetrics {
    pub tick:            Tick,
    pub seated:          usize,
    /// Passengers on door or aisle cells (standing blockers included).
    pub aisle_occupancy: usize,
    /// Walkers whose next aisle cell was occupied.
    pub blocked:         usize,
    /// Passengers queued at the door, at their row, stowing or shuffling.
    pub waiting:         usize,
    /// Seat shuffles in progress.
    pub shuffling:       usize,
}

/// How one passenger got into its seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShuffleRecord {
    pub passenger:     PassengerId,
    pub row:           u16,
    pub column:        u16,
    pub shuffle_type:  ShuffleType,
    pub blockers:      usize,
    /// Ticks from the end of stowing until seated.
    pub shuffle_ticks: u64,
    /// Part of `shuffle_ticks` spent waiting for standing room.
    pub waiting_ticks: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassengerRecord {
    pub passenger:     PassengerId,
    pub admitted:      Option<Tick>,
    pub seated:        Option<Tick>,
    pub wait_ticks:    u32,
    pub blocked_ticks: u32,
    pub stow_ticks:    u32,
}

// ── MetricsCollector ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    pub ticks:      Vec<TickMetrics>,
    pub shuffles:   Vec<ShuffleRecord>,
    /// Filled by [`MetricsCollector::finalize`] when the run ends.
    pub passengers: Vec<PassengerRecord>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&mut self, m: TickMetrics) {
        self.ticks.push(m);
    }

    pub fn record_shuffle(&mut self, r: ShuffleRecord) {
        self.shuffles.push(r);
    }

    /// Copy the per-passenger counters out of the store.
    pub fn finalize(&mut self, store: &PassengerStore) {
        self.passengers = store
            .passenger_ids()
            .map(|p| {
                let i = p.index();
                PassengerRecord {
                    passenger:     p,
                    admitted:      store.admitted_tick[i],
                    seated:        store.seated_tick[i],
                    wait_ticks:    store.wait_ticks[i],
                    blocked_ticks: store.blocked_ticks[i],
                    stow_ticks:    store.stow_delay[i],
                }
            })
            .collect();
    }

    /// Blocked walkers per tick.
    pub fn congestion_series(&self) -> Vec<usize> {
        self.ticks.iter().map(|t| t.blocked).collect()
    }

    pub fn occupancy_series(&self) -> Vec<usize> {
        self.ticks.iter().map(|t| t.aisle_occupancy).collect()
    }

    pub fn peak_aisle_occupancy(&self) -> usize {
        self.ticks.iter().map(|t| t.aisle_occupancy).max().unwrap_or(0)
    }

    pub fn total_shuffle_ticks(&self) -> u64 {
        self.shuffles.iter().map(|s| s.shuffle_ticks).sum()
    }

    pub fn total_shuffle_waiting_ticks(&self) -> u64 {
        self.shuffles.iter().map(|s| s.waiting_ticks as u64).sum()
    }

    /// Number of shuffles of type `t` recorded so far.
    pub fn shuffle_count(&self, t: ShuffleType) -> usize {
        self.shuffles.iter().filter(|s| s.shuffle_type == t).count()
    }
}

// ── Run results ───────────────────────────────────────────────────────────────

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub passenger_count:          usize,
    pub total_boarding_ticks:     u64,
    pub boarding_time_secs:       f64,
    /// Mean wait ticks per passenger.
    pub mean_passenger_wait:      f64,
    pub total_shuffle_ticks:      u64,
    pub total_shuffle_wait_ticks: u64,
}

impl RunSummary {
    pub(crate) fn from_run(
        store:   &PassengerStore,
        metrics: &MetricsCollector,
        clock:   &SimClock,
    ) -> Self {
        let total_ticks = clock.current_tick.0;
        let wait_sum: u64 = store.wait_ticks.iter().map(|w| *w as u64).sum();
        let mean_passenger_wait = if store.is_empty() {
            0.0
        } else {
            wait_sum as f64 / store.count as f64
        };
        Self {
            passenger_count:          store.count,
            total_boarding_ticks:     total_ticks,
            boarding_time_secs:       clock.secs_for_ticks(total_ticks),
            mean_passenger_wait,
            total_shuffle_ticks:      metrics.total_shuffle_ticks(),
            total_shuffle_wait_ticks: metrics.total_shuffle_waiting_ticks(),
        }
    }
}

/// One row of the per-run output table.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub run_id:               RunId,
    /// `BoardingPolicy` display form, e.g. `back-to-front:3`.
    pub policy:               String,
    pub conformance_rate:     f64,
    pub seed:                 u64,
    pub passenger_count:      usize,
    /// Ticks processed.  Equals `max_ticks` for aborted runs.
    pub total_boarding_ticks: u64,
    pub boarding_time_secs:   f64,
    pub mean_passenger_wait:  f64,
    /// Sum over passengers of ticks between the end of stowing and being seated.
    pub total_shuffle_wait:   u64,
    pub aborted:              bool,
}

/// Statistics over the non-aborted runs of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub runs:                usize,
    pub aborted:             usize,
    pub mean_boarding_ticks: f64,
    pub std_boarding_ticks:  f64,
    pub min_boarding_ticks:  u64,
    pub max_boarding_ticks:  u64,
    pub mean_boarding_secs:  f64,
}

/// Summarize `records`, ignoring aborted runs.  `None` if every run aborted.
pub fn aggregate<'a, I>(records: I) -> Option<BatchSummary>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut aborted = 0usize;
    let mut ticks = Vec::new();
    let mut secs = 0.0;
    for r in records {
        if r.aborted {
            aborted += 1;
        } else {
            ticks.push(r.total_boarding_ticks);
            secs += r.boarding_time_secs;
        }
    }
    if ticks.is_empty() {
        return None;
    }

    let n = ticks.len() as f64;
    let mean = ticks.iter().map(|t| *t as f64).sum::<f64>() / n;
    let var = ticks.iter().map(|t| (*t as f64 - mean).powi(2)).sum::<f64>() / n;
    Some(BatchSummary {
        runs:                ticks.len(),
        aborted,
        mean_boarding_ticks: mean,
        std_boarding_ticks:  var.sqrt(),
        min_boarding_ticks:  ticks.iter().copied().min().unwrap_or(0),
        max_boarding_ticks:  ticks.iter().copied().max().unwrap_or(0),
        mean_boarding_secs:  secs / n,
    })
}

/// [`aggregate`] per policy, in first-seen order.
pub fn aggregate_by_policy(records: &[RunRecord]) -> Vec<(String, Option<BatchSummary>)> {
    let mut policies: Vec<&str> = Vec::new();
    for r in records {
        if !policies.contains(&r.policy.as_str()) {
            policies.push(&r.policy);
        }
    }
    policies
        .into_iter()
        .map(|p| (p.to_string(), aggregate(records.iter().filter(|r| r.policy == p))))
        .collect()
}
