//! Registry errors.

use mintgate_ledger::LedgerError;
use mintgate_types::{Address, Denom};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unauthorized: {caller}")]
    Unauthorized { caller: Address },

    #[error("denom {0} is not administered by this registry")]
    UnknownDenom(Denom),

    #[error("amount must be non-zero")]
    InvalidAmount,

    #[error("invalid denom {denom}: {reason}")]
    InvalidDenom { denom: Denom, reason: String },

    #[error("at least one denom must be provided")]
    NoDenoms,

    #[error("no funds attached")]
    NoFunds,

    #[error("this message does not accept funds")]
    UnexpectedFunds,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(String),
}
