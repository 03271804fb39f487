//! Who is in the way, and what kind of shuffle that makes.

use std::fmt;

use ab_cabin::{CabinLayout, Coord, Grid, SeatInfo, SeatSide};
use ab_core::PassengerId;
use ab_passenger::PassengerStore;

/// Seat-shuffle classification.
///
/// | Type | Blockers                        |
/// |------|---------------------------------|
/// | `A`  | none                            |
/// | `B`  | one, in the aisle seat          |
/// | `C`  | one, in a middle seat           |
/// | `D`  | two or more                     |
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum ShuffleType {
    A,
    B,
    C,
    D,
}

impl ShuffleType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShuffleType::A => "A",
            ShuffleType::B => "B",
            ShuffleType::C => "C",
            ShuffleType::D => "D",
        }
    }
}

impl fmt::Display for ShuffleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seated passengers between the aisle and `seat`, nearest the aisle first.
///
/// Only seat cells on the same row and hand with a smaller distance are
/// inspected, so the cost is O(seats_per_side).
pub fn blockers(
    seat:   &SeatInfo,
    layout: &CabinLayout,
    grid:   &Grid,
    store:  &PassengerStore,
) -> Vec<PassengerId> {
    (1..seat.distance)
        .filter_map(|d| {
            let at = layout.seat_coord(seat.row, layout.column_at(seat.hand, d));
            grid.occupant_at(at).filter(|q| store.is_seated(*q))
        })
        .collect()
}

/// Classify a shuffle from the blockers' seats.
pub fn classify(blocker_seats: &[SeatInfo]) -> ShuffleType {
    match blocker_seats {
        [] => ShuffleType::A,
        [only] if only.side == SeatSide::Aisle => ShuffleType::B,
        [_] => ShuffleType::C,
        _ => ShuffleType::D,
    }
}

/// The `count` aisle cells directly aft of `row`, nearest first.
pub fn stand_cells(layout: &CabinLayout, row: u16, count: usize) -> Vec<Coord> {
    let row_x = layout.row_x(row);
    (1..=count as u16)
        .map(|k| Coord::new(row_x + k, layout.aisle_column()))
        .collect()
}
