//! Plain data row types written by output backends.

use ab_core::RunId;
use ab_interference::ShuffleType;
use ab_sim::{RunRecord, ShuffleRecord, TickMetrics};

/// Totals for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub run_id:               u32,
    pub policy:               String,
    pub conformance_rate:     f64,
    pub seed:                 u64,
    pub passenger_count:      u64,
    pub total_boarding_ticks: u64,
    pub boarding_time_secs:   f64,
    pub mean_passenger_wait:  f64,
    pub total_shuffle_wait:   u64,
    pub aborted:              bool,
}

impl From<&RunRecord> for RunRow {
    fn from(r: &RunRecord) -> Self {
        Self {
            run_id:               r.run_id.0,
            policy:               r.policy.clone(),
            conformance_rate:     r.conformance_rate,
            seed:                 r.seed,
            passenger_count:      r.passenger_count as u64,
            total_boarding_ticks: r.total_boarding_ticks,
            boarding_time_secs:   r.boarding_time_secs,
            mean_passenger_wait:  r.mean_passenger_wait,
            total_shuffle_wait:   r.total_shuffle_wait,
            aborted:              r.aborted,
        }
    }
}

/// End-of-tick counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRow {
    pub run_id:          u32,
    pub tick:            u64,
    pub seated:          u64,
    pub aisle_occupancy: u64,
    pub blocked:         u64,
    pub waiting:         u64,
    pub shuffling:       u64,
}

impl TickRow {
    pub fn new(run_id: RunId, m: &TickMetrics) -> Self {
        Self {
            run_id:          run_id.0,
            tick:            m.tick.0,
            seated:          m.seated as u64,
            aisle_occupancy: m.aisle_occupancy as u64,
            blocked:         m.blocked as u64,
            waiting:         m.waiting as u64,
            shuffling:       m.shuffling as u64,
        }
    }
}

/// How one passenger reached its seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleRow {
    pub run_id:        u32,
    pub passenger_id:  u32,
    pub row:           u16,
    pub column:        u16,
    pub shuffle_type:  ShuffleType,
    pub blockers:      u32,
    pub shuffle_ticks: u64,
    pub waiting_ticks: u32,
}

impl ShuffleRow {
    pub fn new(run_id: RunId, s: &ShuffleRecord) -> Self {
        Self {
            run_id:        run_id.0,
            passenger_id:  s.passenger.0,
            row:           s.row,
            column:        s.column,
            shuffle_type:  s.shuffle_type,
            blockers:      s.blockers as u32,
            shuffle_ticks: s.shuffle_ticks,
            waiting_ticks: s.waiting_ticks,
        }
    }
}
