//! Cabin-subsystem error type.

use thiserror::Error;

use ab_core::PassengerId;

use crate::Coord;

/// Errors produced by `ab-cabin`.
///
/// `OutOfBounds`, `OccupiedCell`, `NotOccupant` and `NotWalkable` coming out of the grid at
/// run time indicate a defect in agent movement, never a recoverable state.
#[derive(Debug, Error)]
pub enum CabinError {
    #[error("coordinate {0} is outside the cabin")]
    OutOfBounds(Coord),

    #[error("cannot place {passenger} at {at}: occupied by {occupant}")]
    OccupiedCell {
        at:        Coord,
        passenger: PassengerId,
        occupant:  PassengerId,
    },

    #[error("cannot move {passenger} from {at}: cell holds {found:?}")]
    NotOccupant {
        at:        Coord,
        passenger: PassengerId,
        found:     Option<PassengerId>,
    },

    #[error("coordinate {0} is not walkable")]
    NotWalkable(Coord),

    #[error("invalid cabin layout: {0}")]
    InvalidLayout(String),

    #[error("manifest does not match seat map: {0}")]
    ManifestMismatch(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CabinResult<T> = Result<T, CabinError>;
