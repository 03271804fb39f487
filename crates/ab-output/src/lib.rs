//! `ab-output` — result writers for boarding runs.
//!
//! | File           | One row per                   | Written by                         |
//! |----------------|-------------------------------|------------------------------------|
//! | `runs.csv`     | run                           | [`OutputWriter::write_run`]        |
//! | `shuffles.csv` | passenger seated              | [`OutputWriter::write_shuffles`]   |
//! | `ticks.csv`    | tick (only if enabled)        | [`OutputWriter::write_ticks`]      |
//!
//! Finished batches go through [`write_outcomes`]; a single stepped run can
//! stream its tick rows live through [`SimOutputObserver`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ab_output::{CsvWriter, OutputWriter, write_outcomes};
//!
//! let outcomes = ab_sim::run_batch(&layout, &source, &configs)?;
//! let mut writer = CsvWriter::new(Path::new("./out"), false)?;
//! write_outcomes(&mut writer, &outcomes)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RunRow, ShuffleRow, TickRow};
pub use writer::{OutputWriter, write_outcome, write_outcomes};
