//! `SimOutputObserver<W>` — streams a stepped run's ticks to an `OutputWriter`.

use ab_core::{RunId, Tick};
use ab_sim::{RunRecord, ShuffleRecord, SimObserver, TickMetrics};

use crate::row::{RunRow, ShuffleRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one [`TickRow`] per tick as the run
/// progresses and flushes when the run ends.
///
/// Errors from the writer are stored because `SimObserver` methods have no
/// return value.  After the run returns, check with
/// [`take_error`][Self::take_error], then write the run totals with
/// [`finish_run`][Self::finish_run].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    run_id:     RunId,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, run_id: RunId) -> Self {
        Self { writer, run_id, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write the run row and its shuffle rows.
    pub fn finish_run(&mut self, record: &RunRecord, shuffles: &[ShuffleRecord]) -> OutputResult<()> {
        self.writer.write_run(&RunRow::from(record))?;
        let rows: Vec<ShuffleRow> = shuffles.iter().map(|s| ShuffleRow::new(self.run_id, s)).collect();
        self.writer.write_shuffles(&rows)
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, metrics: &TickMetrics) {
        let row = TickRow::new(self.run_id, metrics);
        let result = self.writer.write_ticks(&[row]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick, _completed: bool) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
