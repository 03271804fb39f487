//! Passenger lifecycle states.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PassengerState {
    /// In the boarding queue, not yet on the grid.
    #[default]
    WaitingToBoard,
    /// On the door or aisle, heading for the assigned row.
    WalkingAisle,
    /// On the aisle cell next to the assigned row.
    AtRow,
    /// Putting luggage away; `remaining` ticks left.
    StowingLuggage { remaining: u32 },
    /// Waiting for seated row-mates to stand and let the passenger through.
    ShuffleWait,
    /// In the assigned seat.  Terminal.
    Seated,
}

impl PassengerState {
    /// The transition table.
    ///
    /// `StowingLuggage -> StowingLuggage` is the per-tick countdown.
    pub fn can_transition_to(self, next: PassengerState) -> bool {
        use PassengerState::*;
        matches!(
            (self, next),
            (WaitingToBoard, WalkingAisle)
                | (WalkingAisle, AtRow)
                | (AtRow, StowingLuggage { .. })
                | (StowingLuggage { .. }, StowingLuggage { .. })
                | (StowingLuggage { .. }, ShuffleWait)
                | (StowingLuggage { .. }, Seated)
                | (ShuffleWait, Seated)
        )
    }

    #[inline]
    pub fn is_seated(self) -> bool {
        self == PassengerState::Seated
    }

    /// `true` while the passenger occupies a door or aisle cell.
    #[inline]
    pub fn is_in_aisle(self) -> bool {
        !matches!(self, PassengerState::WaitingToBoard | PassengerState::Seated)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassengerState::WaitingToBoard        => "waiting_to_board",
            PassengerState::WalkingAisle          => "walking_aisle",
            PassengerState::AtRow                 => "at_row",
            PassengerState::StowingLuggage { .. } => "stowing_luggage",
            PassengerState::ShuffleWait           => "shuffle_wait",
            PassengerState::Seated                => "seated",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerState::StowingLuggage { remaining } => {
                write!(f, "stowing_luggage({remaining})")
            }
            other => f.write_str(other.as_str()),
        }
    }
}
