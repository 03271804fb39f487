use thiserror::Error;

use ab_cabin::CabinError;
use ab_core::PassengerId;

#[derive(Debug, Error)]
pub enum InterferenceError {
    #[error("grid error during seat shuffle: {0}")]
    Cabin(#[from] CabinError),

    #[error("{0} already has a seat shuffle in progress")]
    AlreadyActive(PassengerId),

    #[error("{0} has no seat shuffle in progress")]
    NoActiveEvent(PassengerId),
}

pub type InterferenceResult<T> = Result<T, InterferenceError>;
