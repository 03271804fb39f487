//! One seat shuffle in progress (or finished).

use ab_cabin::Coord;
use ab_core::{PassengerId, Tick};

use crate::ShuffleType;

/// Where an event is in its timeline.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShufflePhase {
    /// Blockers are still seated; at least one stand cell was busy.
    Deferred,
    /// Blockers are in the aisle; `remaining` ticks until the passenger sits.
    Standing { remaining: u32 },
    Resolved,
}

#[derive(Clone, Debug)]
pub struct InterferenceEvent {
    /// The passenger trying to reach its seat.
    pub passenger:        PassengerId,
    pub shuffle_type:     ShuffleType,
    /// The passenger's aisle cell and seat cell.
    pub aisle_cell:       Coord,
    pub seat_cell:        Coord,
    /// Nearest-to-aisle first.
    pub blockers:         Vec<PassengerId>,
    pub blocker_seats:    Vec<Coord>,
    /// `stand_cells[i]` is where `blockers[i]` waits.
    pub stand_cells:      Vec<Coord>,
    /// Per-blocker stand-and-reseat delay, in ticks.
    pub delays:           Vec<u32>,
    pub aggregated_delay: u32,
    pub created:          Tick,
    pub stood:            Option<Tick>,
    pub resolved:         Option<Tick>,
    /// Ticks spent `Deferred`.
    pub waiting_ticks:    u32,
    pub phase:            ShufflePhase,
}

impl InterferenceEvent {
    /// Ticks from creation to resolution.  `None` while in progress.
    pub fn shuffle_ticks(&self) -> Option<u64> {
        self.resolved.map(|r| r.since(self.created))
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.phase == ShufflePhase::Resolved
    }
}
