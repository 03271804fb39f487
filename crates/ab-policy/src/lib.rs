//! `ab-policy` — who boards when.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`policy`]      | `BoardingPolicy` and `generate_order`                |
//! | [`conformance`] | `apply_conformance` (random deviation from the order) |
//! | [`queue`]       | `BoardingQueue` (order + cursor)                     |
//! | [`error`]       | `PolicyError`, `PolicyResult<T>`                     |
//!
//! # Pipeline
//!
//! ```text
//! Manifest ──generate_order──▶ pure order ──apply_conformance──▶ BoardingQueue
//!              (policy rng)                  (conformance rng)
//! ```
//!
//! The two stages draw from separate streams so that changing the
//! conformance rate does not change the pure order for the same seed.

pub mod conformance;
pub mod error;
pub mod policy;
pub mod queue;

#[cfg(test)]
mod tests;

pub use conformance::apply_conformance;
pub use error::{PolicyError, PolicyResult};
pub use policy::BoardingPolicy;
pub use queue::BoardingQueue;
