//! `ab-interference` — seat shuffles.
//!
//! A passenger who has finished stowing may find row-mates already seated
//! between the aisle and its seat.  Those blockers must stand up, step into
//! the aisle behind the row, and sit back down once the passenger is in.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`classify`] | `blockers`, `classify`, `ShuffleType`, `stand_cells`      |
//! | [`event`]    | `InterferenceEvent`, `ShufflePhase`                       |
//! | [`resolver`] | `InterferenceResolver`, `ShuffleAggregation`              |
//! | [`error`]    | `InterferenceError`, `InterferenceResult<T>`              |
//!
//! # Timeline of one event
//!
//! ```text
//! created ──(stand cells busy: waiting)──▶ stood ──(aggregated delay)──▶ resolved
//! ```
//!
//! The passenger keeps its aisle cell for the whole event.

pub mod classify;
pub mod error;
pub mod event;
pub mod resolver;


pub use classify::{ShuffleType, blockers, classify, stand_cells};
pub use error::{InterferenceError, InterferenceResult};
pub use event::{InterferenceEvent, ShufflePhase};
pub use resolver::{DEFAULT_SHUFFLE_DELAY, InterferenceResolver, ShuffleAggregation};
