//! Tests for ab-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use ab_interference::ShuffleType;

    use crate::csv::CsvWriter;
    use crate::row::{RunRow, ShuffleRow, TickRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn run_row(run_id: u32) -> RunRow {
        RunRow {
            run_id,
            policy:               "back-to-front:3".into(),
            conformance_rate:     0.25,
            seed:                 7,
            passenger_count:      174,
            total_boarding_ticks: 1200,
            boarding_time_secs:   600.0,
            mean_passenger_wait:  12.5,
            total_shuffle_wait:   90,
            aborted:              false,
        }
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path(), false).unwrap();
        assert!(dir.path().join("runs.csv").exists());
        assert!(dir.path().join("shuffles.csv").exists());
        assert!(!dir.path().join("ticks.csv").exists());

        let dir = tmp();
        let _w = CsvWriter::new(dir.path(), true).unwrap();
        assert!(dir.path().join("ticks.csv").exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let mut w = CsvWriter::new(&nested, false).unwrap();
        w.finish().unwrap();
        assert!(nested.join("runs.csv").exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), true).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("runs.csv")),
            [
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
            ]
        );
        assert_eq!(
            headers(&dir.path().join("ticks.csv")),
            ["run_id", "tick", "seated", "aisle_occupancy", "blocked", "waiting", "shuffling"]
        );
        assert_eq!(headers(&dir.path().join("shuffles.csv"))[4], "shuffle_type");
    }

    #[test]
    fn run_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        w.write_run(&run_row(0)).unwrap();
        w.write_run(&RunRow { aborted: true, ..run_row(1) }).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("runs.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "back-to-front:3");
        assert_eq!(&rows[0][2], "0.25");
        assert_eq!(&rows[0][6], "600.0");
        assert_eq!(&rows[0][7], "12.500");
        assert_eq!(&rows[0][9], "0");
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][9], "1");
    }

    #[test]
    fn tick_rows_skipped_when_disabled() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        let row = TickRow { run_id: 0, tick: 0, seated: 0, aisle_occupancy: 1, blocked: 0, waiting: 3, shuffling: 0 };
        w.write_ticks(&[row]).unwrap();
        w.finish().unwrap();
        assert!(!dir.path().join("ticks.csv").exists());
    }

    #[test]
    fn shuffle_type_as_letter() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        let row = ShuffleRow {
            run_id:        2,
            passenger_id:  40,
            row:           6,
            column:        0,
            shuffle_type:  ShuffleType::D,
            blockers:      2,
            shuffle_ticks: 5,
            waiting_ticks: 1,
        };
        w.write_shuffles(&[row]).unwrap();
        w.write_shuffles(&[]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("shuffles.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "40");
        assert_eq!(&rows[0][4], "D");
        assert_eq!(&rows[0][5], "2");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), true).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Whole runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use ab_cabin::{CabinLayout, Manifest};
    use ab_core::RunId;
    use ab_policy::BoardingPolicy;
    use ab_sim::{ManifestSource, RunConfig, SimBuilder, run_batch};

    use crate::{CsvWriter, OutputWriter, SimOutputObserver, write_outcomes};

    fn config(seed: u64) -> RunConfig {
        RunConfig { policy: BoardingPolicy::OutsideIn, seed, ..RunConfig::default() }
    }

    fn row_count(path: &std::path::Path) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn batch_outcomes_to_csv() {
        let layout = CabinLayout::new(5, 3);
        let configs = vec![config(1), config(2)];
        let outcomes = run_batch(&layout, &ManifestSource::Full, &configs).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path(), true).unwrap();
        write_outcomes(&mut w, &outcomes).unwrap();
        w.finish().unwrap();

        assert_eq!(row_count(&dir.path().join("runs.csv")), 2);
        // Every passenger is seated exactly once per run.
        assert_eq!(row_count(&dir.path().join("shuffles.csv")), 60);
        let ticks: u64 = outcomes.iter().map(|o| o.record.total_boarding_ticks).sum();
        assert_eq!(row_count(&dir.path().join("ticks.csv")) as u64, ticks);
    }

    #[test]
    fn observer_streams_ticks() {
        let layout = CabinLayout::new(5, 3);
        let manifest = Manifest::full(&layout);
        let mut sim = SimBuilder::new(config(3), layout, manifest).run_id(RunId(4)).build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path(), true).unwrap();
        let mut obs = SimOutputObserver::new(writer, RunId(4));
        let summary = sim.run_to_completion(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        obs.finish_run(&sim.record(false), &sim.metrics().shuffles).unwrap();
        let mut w = obs.into_writer();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("ticks.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, summary.total_boarding_ticks);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[rows.len() - 1][2], "30");

        assert_eq!(row_count(&dir.path().join("runs.csv")), 1);
        assert_eq!(row_count(&dir.path().join("shuffles.csv")), 30);
    }
}
