//! Passenger manifest: who sits where.

use rustc_hash::FxHashSet;

use ab_core::{PassengerId, SimRng};

use crate::{CabinError, CabinLayout, CabinResult, SeatInfo};

/// One manifest line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ManifestEntry {
    pub passenger: PassengerId,
    pub row:       u16,
    /// Grid column of the seat (`Coord::y`).
    pub column:    u16,
}

/// Validated manifest, sorted by passenger id.
///
/// Invariants (checked by [`Manifest::new`]):
/// - ids are dense: entry `i` has `PassengerId(i)`;
/// - every seat exists in the layout;
/// - no seat is assigned twice.
///
/// Partial occupancy is allowed: the manifest need not fill the cabin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    seats:   Vec<SeatInfo>,
}

impl Manifest {
    /// Validate `entries` against `layout`.
    pub fn new(mut entries: Vec<ManifestEntry>, layout: &CabinLayout) -> CabinResult<Self> {
        entries.sort_by_key(|e| e.passenger);

        let mut taken = FxHashSet::default();
        taken.reserve(entries.len());
        let mut seats = Vec::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if e.passenger.index() != i {
                return Err(CabinError::ManifestMismatch(format!(
                    "passenger ids must be dense from 0; expected PassengerId({i}), found {}",
                    e.passenger
                )));
            }
            let Some(info) = layout.seat_info(e.row, e.column) else {
                return Err(CabinError::ManifestMismatch(format!(
                    "{} is assigned to row {} column {}, which is not a seat",
                    e.passenger, e.row, e.column
                )));
            };
            if !taken.insert((e.row, e.column)) {
                return Err(CabinError::ManifestMismatch(format!(
                    "seat {} assigned more than once",
                    layout.seat_label(e.row, e.column)
                )));
            }
            seats.push(info);
        }

        Ok(Self { entries, seats })
    }

    /// Every seat filled, ids assigned front row first, port to starboard.
    pub fn full(layout: &CabinLayout) -> Self {
        let seats: Vec<SeatInfo> = layout.seats().collect();
        let entries = seats
            .iter()
            .enumerate()
            .map(|(i, s)| ManifestEntry {
                passenger: PassengerId::from_index(i),
                row:       s.row,
                column:    s.column,
            })
            .collect();
        Self { entries, seats }
    }

    /// `count` passengers on seats drawn uniformly without replacement.
    ///
    /// Ids are assigned in seat order (front to rear) so the result is
    /// independent of the draw order.
    pub fn sample(layout: &CabinLayout, count: usize, rng: &mut SimRng) -> CabinResult<Self> {
        let mut seats: Vec<SeatInfo> = layout.seats().collect();
        if count > seats.len() {
            return Err(CabinError::ManifestMismatch(format!(
                "{count} passengers do not fit in {} seats",
                seats.len()
            )));
        }
        rng.shuffle(&mut seats);
        seats.truncate(count);
        seats.sort_by_key(|s| (s.row, s.column));

        let entries = seats
            .iter()
            .enumerate()
            .map(|(i, s)| ManifestEntry {
                passenger: PassengerId::from_index(i),
                row:       s.row,
                column:    s.column,
            })
            .collect();
        Ok(Self { entries, seats })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Seat identity of every passenger, indexed by `PassengerId`.
    pub fn seats(&self) -> &[SeatInfo] {
        &self.seats
    }

    pub fn seat_of(&self, passenger: PassengerId) -> Option<SeatInfo> {
        self.seats.get(passenger.index()).copied()
    }

    /// Iterator over all passenger ids in ascending order.
    pub fn passenger_ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        self.entries.iter().map(|e| e.passenger)
    }
}
