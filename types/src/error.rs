//! Validation errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: &'static str },

    #[error("invalid denom {denom:?}: {reason}")]
    InvalidDenom { denom: String, reason: &'static str },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid coin {0:?}: expected <amount><denom>")]
    InvalidCoin(String),
}
