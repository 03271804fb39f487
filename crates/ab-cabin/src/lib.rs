//! `ab-cabin` — cabin topology, occupancy grid, and manifest.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`layout`]   | `CabinLayout`, `Coord`, `CellKind`, `SeatInfo`, `SeatSide`, `Hand` |
//! | [`grid`]     | `Grid` (dense cell kinds + occupancy)                      |
//! | [`manifest`] | `Manifest`, `ManifestEntry`                                |
//! | [`loader`]   | `load_manifest_csv`, `load_manifest_reader`                |
//! | [`error`]    | `CabinError`, `CabinResult<T>`                             |
//!
//! # Coordinate system
//!
//! ```text
//!   y
//!   0   . . W . W . W . . .      port window seats
//!   1   . . M . M . M . . .
//!   2   . . A . A . A . . .
//!   3   D a a a a a a a a a      door (x = 0) then aisle
//!   4   . . A . A . A . . .
//!   5   . . M . M . M . . .
//!   6   . . W . W . W . . .      starboard window seats
//!       x →  (front)      (rear)
//! ```
//!
//! With `row_pitch = 2` every other aisle cell has no seats beside it
//! (legroom, `CellKind::Void`).  Cells behind the last row give seated
//! passengers room to stand during a seat shuffle.

pub mod error;
pub mod grid;
pub mod layout;
pub mod loader;
pub mod manifest;

#[cfg(test)]
mod tests;

pub use error::{CabinError, CabinResult};
pub use grid::Grid;
pub use layout::{CabinLayout, CellKind, Coord, Hand, SeatInfo, SeatSide};
pub use loader::{load_manifest_csv, load_manifest_reader};
pub use manifest::{Manifest, ManifestEntry};
