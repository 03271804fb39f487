//! The `OutputWriter` trait and helpers that feed it whole runs.

use ab_sim::RunOutcome;

use crate::{OutputResult, RunRow, ShuffleRow, TickRow};

/// Implemented by every output backend.
pub trait OutputWriter {
    fn write_run(&mut self, row: &RunRow) -> OutputResult<()>;

    fn write_ticks(&mut self, rows: &[TickRow]) -> OutputResult<()>;

    fn write_shuffles(&mut self, rows: &[ShuffleRow]) -> OutputResult<()>;

    /// Push buffered rows to disk without closing anything.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write the run row, tick rows and shuffle rows of one finished run.
pub fn write_outcome<W: OutputWriter>(writer: &mut W, outcome: &RunOutcome) -> OutputResult<()> {
    let run_id = outcome.record.run_id;
    writer.write_run(&RunRow::from(&outcome.record))?;

    let ticks: Vec<TickRow> = outcome.metrics.ticks.iter().map(|m| TickRow::new(run_id, m)).collect();
    writer.write_ticks(&ticks)?;

    let shuffles: Vec<ShuffleRow> =
        outcome.metrics.shuffles.iter().map(|s| ShuffleRow::new(run_id, s)).collect();
    writer.write_shuffles(&shuffles)
}

/// [`write_outcome`] for every run, in order.
pub fn write_outcomes<W: OutputWriter>(writer: &mut W, outcomes: &[RunOutcome]) -> OutputResult<()> {
    for outcome in outcomes {
        write_outcome(writer, outcome)?;
    }
    writer.flush()
}
