//! `InterferenceResolver` — owns the seat shuffles in progress.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ab_cabin::{CabinLayout, Grid, SeatInfo};
use ab_core::{DelayDistribution, PassengerId, PassengerRng, Tick};
use ab_passenger::PassengerStore;

use crate::{
    InterferenceError, InterferenceEvent, InterferenceResult, ShufflePhase, classify, stand_cells,
};

/// Per-blocker delay used when none is configured.
pub const DEFAULT_SHUFFLE_DELAY: DelayDistribution = DelayDistribution::Fixed { ticks: 3 };

/// How per-blocker delays combine into the passenger's delay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleAggregation {
    /// Blockers stand at the same time: the slowest one decides.
    #[default]
    Max,
    /// Blockers stand one after another.
    Sum,
}

impl ShuffleAggregation {
    pub fn aggregate(self, delays: &[u32]) -> u32 {
        match self {
            ShuffleAggregation::Max => delays.iter().copied().max().unwrap_or(0),
            ShuffleAggregation::Sum => delays.iter().fold(0u32, |acc, d| acc.saturating_add(*d)),
        }
    }
}

pub struct InterferenceResolver {
    shuffle_delay: DelayDistribution,
    aggregation:   ShuffleAggregation,
    active:        BTreeMap<PassengerId, InterferenceEvent>,
}

impl InterferenceResolver {
    pub fn new(shuffle_delay: DelayDistribution, aggregation: ShuffleAggregation) -> Self {
        Self { shuffle_delay, aggregation, active: BTreeMap::new() }
    }

    pub fn aggregation(&self) -> ShuffleAggregation {
        self.aggregation
    }

    /// Number of shuffles in progress.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn event(&self, passenger: PassengerId) -> Option<&InterferenceEvent> {
        self.active.get(&passenger)
    }

    pub fn is_active(&self, passenger: PassengerId) -> bool {
        self.active.contains_key(&passenger)
    }

    /// Open a shuffle for `passenger`, who is on its row's aisle cell with
    /// `blockers` (from [`crate::blockers`]) in the way.
    ///
    /// Each blocker's delay is drawn from the passenger's own generator.
    pub fn begin(
        &mut self,
        passenger: PassengerId,
        blockers:  Vec<PassengerId>,
        layout:    &CabinLayout,
        store:     &PassengerStore,
        tick:      Tick,
        rng:       &mut PassengerRng,
    ) -> InterferenceResult<&InterferenceEvent> {
        let seat = store.seat[passenger.index()];
        let blocker_info: Vec<SeatInfo> = blockers.iter().map(|b| store.seat[b.index()]).collect();
        let delays: Vec<u32> = blockers
            .iter()
            .map(|_| self.shuffle_delay.sample(rng.inner()))
            .collect();
        let aggregated_delay = self.aggregation.aggregate(&delays);

        let event = InterferenceEvent {
            passenger,
            shuffle_type: classify(&blocker_info),
            aisle_cell: layout.row_aisle_cell(seat.row),
            seat_cell: layout.seat_coord(seat.row, seat.column),
            blocker_seats: blocker_info
                .iter()
                .map(|s| layout.seat_coord(s.row, s.column))
                .collect(),
            stand_cells: stand_cells(layout, seat.row, blockers.len()),
            blockers,
            delays,
            aggregated_delay,
            created: tick,
            stood: None,
            resolved: None,
            waiting_ticks: 0,
            phase: ShufflePhase::Deferred,
        };

        match self.active.entry(passenger) {
            Entry::Occupied(_) => Err(InterferenceError::AlreadyActive(passenger)),
            Entry::Vacant(slot) => {
                debug!(
                    %passenger,
                    shuffle_type = %event.shuffle_type,
                    blockers = event.blockers.len(),
                    delay = event.aggregated_delay,
                    %tick,
                    "seat shuffle started"
                );
                Ok(slot.insert(event))
            }
        }
    }

    /// Advance `passenger`'s shuffle by one tick.
    ///
    /// Returns the finished event once the passenger is in its seat and the
    /// blockers are back in theirs.  Grid cells and `store.position` are
    /// updated here; the caller owns the passenger's state transition.
    pub fn advance(
        &mut self,
        passenger: PassengerId,
        grid:      &mut Grid,
        store:     &mut PassengerStore,
        tick:      Tick,
    ) -> InterferenceResult<Option<InterferenceEvent>> {
        let event = self
            .active
            .get_mut(&passenger)
            .ok_or(InterferenceError::NoActiveEvent(passenger))?;

        if event.phase == ShufflePhase::Deferred {
            if !event.stand_cells.iter().all(|c| grid.is_free(*c)) {
                event.waiting_ticks += 1;
                return Ok(None);
            }
            for ((b, from), to) in event.blockers.iter().zip(&event.blocker_seats).zip(&event.stand_cells) {
                grid.relocate(*b, *from, *to)?;
                store.position[b.index()] = Some(*to);
            }
            event.stood = Some(tick);
            event.phase = ShufflePhase::Standing { remaining: event.aggregated_delay };
        }

        match event.phase {
            ShufflePhase::Standing { remaining } if remaining > 0 => {
                event.phase = ShufflePhase::Standing { remaining: remaining - 1 };
                return Ok(None);
            }
            ShufflePhase::Standing { .. } => {}
            _ => return Ok(None),
        }

        grid.relocate(passenger, event.aisle_cell, event.seat_cell)?;
        store.position[passenger.index()] = Some(event.seat_cell);
        for ((b, seat), from) in event.blockers.iter().zip(&event.blocker_seats).zip(&event.stand_cells) {
            grid.relocate(*b, *from, *seat)?;
            store.position[b.index()] = Some(*seat);
        }
        event.phase = ShufflePhase::Resolved;
        event.resolved = Some(tick);
        debug!(
            %passenger,
            waiting = event.waiting_ticks,
            %tick,
            "seat shuffle resolved"
        );

        Ok(self.active.remove(&passenger))
    }
}
