use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown boarding policy {0:?} (expected random, back-to-front, outside-in, segmented-random or steffen-perfect)")]
    UnknownPolicy(String),

    #[error("conformance rate {0} is outside [0, 1]")]
    InvalidConformance(f64),

    #[error("{zones} zones cannot partition {rows} rows")]
    InvalidZones { zones: u16, rows: u16 },
}

pub type PolicyResult<T> = Result<T, PolicyError>;
