//! CSV output backend.
//!
//! Creates, in the configured output directory:
//! - `runs.csv`
//! - `shuffles.csv`
//! - `ticks.csv` when tick output is enabled

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunRow, ShuffleRow, TickRow};

const RUN_HEADER: [&str; 10] = [
    "run_id",
    "policy",
    "conformance_rate",
    "seed",
    "passenger_count",
    "total_boarding_ticks",
    "boarding_time_secs",
    "mean_passenger_wait",
    "total_shuffle_wait",
    "aborted",
];
const TICK_HEADER: [&str; 7] =
    ["run_id", "tick", "seated", "aisle_occupancy", "blocked", "waiting", "shuffling"];
const SHUFFLE_HEADER: [&str; 8] = [
    "run_id",
    "passenger_id",
    "row",
    "column",
    "shuffle_type",
    "blockers",
    "shuffle_ticks",
    "waiting_ticks",
];

pub struct CsvWriter {
    runs:     Writer<File>,
    shuffles: Writer<File>,
    /// `None` when tick output is disabled; `write_ticks` is then a no-op.
    ticks:    Option<Writer<File>>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the CSV files, and write the header rows.
    pub fn new(dir: &Path, with_ticks: bool) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(RUN_HEADER)?;

        let mut shuffles = Writer::from_path(dir.join("shuffles.csv"))?;
        shuffles.write_record(SHUFFLE_HEADER)?;

        let ticks = if with_ticks {
            let mut w = Writer::from_path(dir.join("ticks.csv"))?;
            w.write_record(TICK_HEADER)?;
            Some(w)
        } else {
            None
        };

        debug!(dir = %dir.display(), with_ticks, "csv output opened");
        Ok(Self { runs, shuffles, ticks, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_run(&mut self, row: &RunRow) -> OutputResult<()> {
        self.runs.write_record(&[
            row.run_id.to_string(),
            row.policy.clone(),
            row.conformance_rate.to_string(),
            row.seed.to_string(),
            row.passenger_count.to_string(),
            row.total_boarding_ticks.to_string(),
            format!("{:.1}", row.boarding_time_secs),
            format!("{:.3}", row.mean_passenger_wait),
            row.total_shuffle_wait.to_string(),
            (row.aborted as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_ticks(&mut self, rows: &[TickRow]) -> OutputResult<()> {
        let Some(w) = self.ticks.as_mut() else {
            return Ok(());
        };
        for row in rows {
            w.write_record(&[
                row.run_id.to_string(),
                row.tick.to_string(),
                row.seated.to_string(),
                row.aisle_occupancy.to_string(),
                row.blocked.to_string(),
                row.waiting.to_string(),
                row.shuffling.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_shuffles(&mut self, rows: &[ShuffleRow]) -> OutputResult<()> {
        for row in rows {
            self.shuffles.write_record(&[
                row.run_id.to_string(),
                row.passenger_id.to_string(),
                row.row.to_string(),
                row.column.to_string(),
                row.shuffle_type.as_str().to_string(),
                row.blockers.to_string(),
                row.shuffle_ticks.to_string(),
                row.waiting_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.runs.flush()?;
        self.shuffles.flush()?;
        if let Some(w) = self.ticks.as_mut() {
            w.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
