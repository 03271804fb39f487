//! `ab-passenger` — passenger agents.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `PassengerState` and its transition table                 |
//! | [`store`]   | `PassengerStore` (SoA arrays), `PassengerRngs`            |
//! | [`builder`] | `PassengerStoreBuilder` (from a manifest)                 |
//! | [`error`]   | `PassengerError`, `PassengerResult<T>`                    |
//!
//! # Lifecycle
//!
//! ```text
//! WaitingToBoard ─▶ WalkingAisle ─▶ AtRow ─▶ StowingLuggage ─┬─────────────▶ Seated
//!                                                            └─▶ ShuffleWait ─┘
//! ```
//!
//! Movement and timing decisions are made by the scheduler in `ab-sim`;
//! this crate only stores state and refuses illegal transitions.

pub mod builder;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{DEFAULT_STOW_DELAY, PassengerStoreBuilder};
pub use error::{PassengerError, PassengerResult};
pub use state::PassengerState;
pub use store::{PassengerRngs, PassengerStore};
