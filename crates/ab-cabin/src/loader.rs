//! CSV manifest loader.
//!
//! # CSV format
//!
//! One row per passenger.  `column` is the grid column (`Coord::y`), so
//! with three seats per side columns 0-2 are port, 3 is the aisle (never
//! valid) and 4-6 are starboard.
//!
//! ```csv
//! passenger_id,row,column
//! 0,0,0
//! 1,0,6
//! 2,1,2
//! ```
//!
//! Rows may appear in any order; ids must be dense from 0.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ab_core::PassengerId;

use crate::{CabinLayout, CabinResult, Manifest, ManifestEntry};

#[derive(Deserialize)]
struct ManifestRecord {
    passenger_id: u32,
    row:          u16,
    column:       u16,
}

/// Load and validate a manifest from a CSV file.
pub fn load_manifest_csv(path: &Path, layout: &CabinLayout) -> CabinResult<Manifest> {
    let file = std::fs::File::open(path)?;
    let manifest = load_manifest_reader(file, layout)?;
    debug!(path = %path.display(), passengers = manifest.len(), "loaded manifest");
    Ok(manifest)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(reader: R, layout: &CabinLayout) -> CabinResult<Manifest> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in rdr.deserialize::<ManifestRecord>() {
        let r = record?;
        entries.push(ManifestEntry {
            passenger: PassengerId(r.passenger_id),
            row:       r.row,
            column:    r.column,
        });
    }
    Manifest::new(entries, layout)
}
