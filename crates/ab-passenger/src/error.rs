use thiserror::Error;

use ab_core::PassengerId;

use crate::PassengerState;

#[derive(Debug, Error)]
pub enum PassengerError {
    #[error("{passenger}: illegal transition {from} -> {to}")]
    IllegalTransition {
        passenger: PassengerId,
        from:      PassengerState,
        to:        PassengerState,
    },

    #[error("passenger {0} not in store")]
    NotFound(PassengerId),
}

pub type PassengerResult<T> = Result<T, PassengerError>;
