//! Static cabin geometry: dimensions, coordinates, and seat identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CabinError, CabinResult};

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A grid cell.  `x` runs from the door (0) toward the rear, `y` across the
/// cabin with the aisle at `CabinLayout::aisle_column()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Seat identity ─────────────────────────────────────────────────────────────

/// Which side of the aisle a seat is on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    /// Left, looking forward (`y < aisle`).
    Port,
    /// Right, looking forward (`y > aisle`).
    Starboard,
}

/// Seat position relative to the aisle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatSide {
    Window,
    Middle,
    Aisle,
}

impl SeatSide {
    pub fn as_str(self) -> &'static str {
        match self {
            SeatSide::Window => "window",
            SeatSide::Middle => "middle",
            SeatSide::Aisle  => "aisle",
        }
    }
}

impl fmt::Display for SeatSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the simulation needs to know about one seat.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SeatInfo {
    /// Seat row, 0 = front.
    pub row:      u16,
    /// Grid column (`Coord::y`).
    pub column:   u16,
    pub hand:     Hand,
    pub side:     SeatSide,
    /// Number of cells between the aisle and this seat (aisle seat = 1).
    pub distance: u16,
}

/// The type of a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    /// Entry cell.  Passengers are admitted here.
    Door,
    /// Walkable aisle cell (jet bridge, aisle, aft galley).
    Aisle,
    Seat(SeatInfo),
    /// Legroom or bulkhead.  Never occupied.
    Void,
}

impl CellKind {
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Void)
    }

    /// `true` for door and aisle cells.
    #[inline]
    pub fn is_corridor(self) -> bool {
        matches!(self, CellKind::Door | CellKind::Aisle)
    }
}

// ── CabinLayout ───────────────────────────────────────────────────────────────

/// Cabin dimensions.  The seat map is fully determined by these numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinLayout {
    /// Number of seat rows.
    pub rows:            u16,
    /// Seats on each side of the single aisle.
    pub seats_per_side:  u16,
    /// Aisle cells between the door and row 0's aisle cell.
    pub entrance_length: u16,
    /// Aisle cells per seat row.
    pub row_pitch:       u16,
    /// Aisle cells behind the last row's aisle cell.
    pub aft_clearance:   u16,
}

impl CabinLayout {
    /// A single-aisle cabin with unit row pitch and the minimum aft
    /// clearance needed for seat shuffles.
    pub fn new(rows: u16, seats_per_side: u16) -> Self {
        Self {
            rows,
            seats_per_side,
            entrance_length: 2,
            row_pitch:       1,
            aft_clearance:   seats_per_side,
        }
    }

    /// Airbus A320-200 reference configuration: 29 rows of 3+3 seats, a
    /// six-cell entrance, and two aisle cells per row.
    pub fn a320() -> Self {
        Self {
            rows:            29,
            seats_per_side:  3,
            entrance_length: 6,
            row_pitch:       2,
            aft_clearance:   3,
        }
    }

    pub fn validate(&self) -> CabinResult<()> {
        if self.rows == 0 || self.seats_per_side == 0 {
            return Err(CabinError::InvalidLayout("cabin has no seats".into()));
        }
        if self.entrance_length == 0 {
            return Err(CabinError::InvalidLayout(
                "entrance_length must be at least 1 so the door is not a row".into(),
            ));
        }
        if self.row_pitch == 0 {
            return Err(CabinError::InvalidLayout("row_pitch must be at least 1".into()));
        }
        // Shuffling into a window seat stands up to seats_per_side - 1 blockers.
        if self.aft_clearance + 1 < self.seats_per_side {
            return Err(CabinError::InvalidLayout(format!(
                "aft_clearance {} cannot hold {} standing passengers",
                self.aft_clearance,
                self.seats_per_side - 1
            )));
        }
        let width = self.width() as u64;
        if width > u16::MAX as u64 {
            return Err(CabinError::InvalidLayout(format!("cabin too long ({width} cells)")));
        }
        Ok(())
    }

    /// Number of grid columns (`x` extent).
    pub fn width(&self) -> usize {
        self.entrance_length as usize
            + (self.rows.max(1) as usize - 1) * self.row_pitch as usize
            + self.aft_clearance as usize
            + 1
    }

    /// Number of grid rows (`y` extent): both seat blocks plus the aisle.
    pub fn height(&self) -> usize {
        2 * self.seats_per_side as usize + 1
    }

    #[inline]
    pub fn aisle_column(&self) -> u16 {
        self.seats_per_side
    }

    #[inline]
    pub fn door(&self) -> Coord {
        Coord::new(0, self.aisle_column())
    }

    pub fn seat_count(&self) -> usize {
        self.rows as usize * 2 * self.seats_per_side as usize
    }

    /// `x` of the aisle cell next to seat row `row`.
    #[inline]
    pub fn row_x(&self, row: u16) -> u16 {
        self.entrance_length + row * self.row_pitch
    }

    /// The aisle cell next to seat row `row`.
    #[inline]
    pub fn row_aisle_cell(&self, row: u16) -> Coord {
        Coord::new(self.row_x(row), self.aisle_column())
    }

    /// Seat identity for grid column `column` of `row`, or `None` for the
    /// aisle column and out-of-range values.
    pub fn seat_info(&self, row: u16, column: u16) -> Option<SeatInfo> {
        let aisle = self.aisle_column();
        if row >= self.rows || column == aisle || column as usize >= self.height() {
            return None;
        }
        let (hand, distance) = if column < aisle {
            (Hand::Port, aisle - column)
        } else {
            (Hand::Starboard, column - aisle)
        };
        let side = if distance == self.seats_per_side {
            SeatSide::Window
        } else if distance == 1 {
            SeatSide::Aisle
        } else {
            SeatSide::Middle
        };
        Some(SeatInfo { row, column, hand, side, distance })
    }

    /// Grid coordinate of a seat.
    #[inline]
    pub fn seat_coord(&self, row: u16, column: u16) -> Coord {
        Coord::new(self.row_x(row), column)
    }

    /// Grid column of the seat at `distance` from the aisle on `hand`.
    #[inline]
    pub fn column_at(&self, hand: Hand, distance: u16) -> u16 {
        match hand {
            Hand::Port      => self.aisle_column() - distance,
            Hand::Starboard => self.aisle_column() + distance,
        }
    }

    /// All seats, front row first, port window to starboard window.
    pub fn seats(&self) -> impl Iterator<Item = SeatInfo> + '_ {
        let height = self.height() as u16;
        (0..self.rows).flat_map(move |row| {
            (0..height).filter_map(move |column| self.seat_info(row, column))
        })
    }

    /// Conventional label, e.g. `"12C"`: row number from 1, letters from the
    /// port window skipping the aisle.
    pub fn seat_label(&self, row: u16, column: u16) -> String {
        let aisle = self.aisle_column();
        let letter_index = if column < aisle { column } else { column.saturating_sub(1) };
        let letter = char::from(b'A' + (letter_index % 26) as u8);
        format!("{}{}", row + 1, letter)
    }
}

impl Default for CabinLayout {
    fn default() -> Self {
        Self::a320()
    }
}
