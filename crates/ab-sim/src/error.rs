use thiserror::Error;

use ab_cabin::CabinError;
use ab_interference::InterferenceError;
use ab_passenger::PassengerError;
use ab_policy::PolicyError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// Grid errors during a run are movement defects, not bad input.
    #[error("cabin error: {0}")]
    Cabin(#[from] CabinError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("passenger error: {0}")]
    Passenger(#[from] PassengerError),

    #[error("interference error: {0}")]
    Interference(#[from] InterferenceError),

    #[error("run did not finish within {max_ticks} ticks")]
    RunAborted { max_ticks: u64 },

    #[error("invariant violated at {tick}: {what}")]
    Invariant { tick: ab_core::Tick, what: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
