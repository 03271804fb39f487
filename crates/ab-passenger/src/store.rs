//! Passenger storage: `PassengerStore` (SoA data) and `PassengerRngs`.
//!
//! # Why two structs?
//!
//! The scheduler hands `&mut PassengerRngs` to the interference resolver
//! while it still reads seat and state data out of `&PassengerStore`.
//! Keeping the generators in their own struct lets both borrows coexist.

use ab_cabin::{Coord, SeatInfo};
use ab_core::{PassengerId, PassengerRng, Tick};

use crate::{PassengerError, PassengerResult, PassengerState};

// ── PassengerRngs ─────────────────────────────────────────────────────────────

/// Per-passenger deterministic RNG state, indexed by `PassengerId`.
pub struct PassengerRngs {
    pub inner: Vec<PassengerRng>,
}

impl PassengerRngs {
    pub(crate) fn new(count: usize, run_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| PassengerRng::new(run_seed, PassengerId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, passenger: PassengerId) -> &mut PassengerRng {
        &mut self.inner[passenger.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PassengerStore ────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all passenger state.
///
/// Every `Vec` has exactly `count` elements and `PassengerId` is the index.
/// `state` is private so every change goes through
/// [`PassengerStore::transition`]; the counters are plain fields written by
/// the scheduler.
pub struct PassengerStore {
    pub count: usize,

    state: Vec<PassengerState>,
    seated: usize,

    // ── Static ────────────────────────────────────────────────────────────
    /// Assigned seat.
    pub seat: Vec<SeatInfo>,

    /// Luggage stow time in ticks, sampled once at construction.  Always ≥ 1.
    pub stow_delay: Vec<u32>,

    // ── Dynamic ───────────────────────────────────────────────────────────
    /// Cell currently occupied.  `None` before admission.  A seated
    /// passenger standing aside for a row-mate is on its aisle stand cell.
    pub position: Vec<Option<Coord>>,

    /// Ticks spent neither walking nor seated: queued at the door, at the
    /// row, stowing, or in a seat shuffle.
    pub wait_ticks: Vec<u32>,

    /// Walking ticks with the next aisle cell occupied.
    pub blocked_ticks: Vec<u32>,

    /// Walking activations since the last aisle step.
    pub walk_progress: Vec<u32>,

    /// Ticks from the end of stowing until seated, including waiting.
    pub shuffle_ticks: Vec<u32>,

    /// Part of `shuffle_ticks` spent waiting for standing room.
    pub shuffle_wait_ticks: Vec<u32>,

    pub admitted_tick: Vec<Option<Tick>>,
    pub seated_tick:   Vec<Option<Tick>>,
}

impl PassengerStore {
    pub(crate) fn new(seats: Vec<SeatInfo>, stow_delay: Vec<u32>) -> Self {
        let count = seats.len();
        Self {
            count,
            state:              vec![PassengerState::WaitingToBoard; count],
            seated:             0,
            seat:               seats,
            stow_delay,
            position:           vec![None; count],
            wait_ticks:         vec![0; count],
            blocked_ticks:      vec![0; count],
            walk_progress:      vec![0; count],
            shuffle_ticks:      vec![0; count],
            shuffle_wait_ticks: vec![0; count],
            admitted_tick:      vec![None; count],
            seated_tick:        vec![None; count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PassengerId`s in ascending order.
    pub fn passenger_ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.count as u32).map(PassengerId)
    }

    pub fn state(&self, passenger: PassengerId) -> PassengerResult<PassengerState> {
        self.state
            .get(passenger.index())
            .copied()
            .ok_or(PassengerError::NotFound(passenger))
    }

    /// Read-only view of every passenger's state.
    pub fn states(&self) -> &[PassengerState] {
        &self.state
    }

    /// Move `passenger` to `next`, returning the previous state.
    pub fn transition(
        &mut self,
        passenger: PassengerId,
        next:      PassengerState,
    ) -> PassengerResult<PassengerState> {
        let slot = self
            .state
            .get_mut(passenger.index())
            .ok_or(PassengerError::NotFound(passenger))?;
        let from = *slot;
        if !from.can_transition_to(next) {
            return Err(PassengerError::IllegalTransition { passenger, from, to: next });
        }
        *slot = next;
        if next.is_seated() {
            self.seated += 1;
        }
        Ok(from)
    }

    #[inline]
    pub fn is_seated(&self, passenger: PassengerId) -> bool {
        self.state
            .get(passenger.index())
            .is_some_and(|s| s.is_seated())
    }

    /// Number of seated passengers.  O(1).
    #[inline]
    pub fn seated_count(&self) -> usize {
        self.seated
    }

    #[inline]
    pub fn all_seated(&self) -> bool {
        self.seated == self.count
    }

    /// Ticks from admission to seated, if both happened.
    pub fn boarding_ticks(&self, passenger: PassengerId) -> Option<u64> {
        let i = passenger.index();
        match (self.admitted_tick.get(i)?, self.seated_tick.get(i)?) {
            (Some(a), Some(s)) => Some(s.since(*a)),
            _ => None,
        }
    }
}
