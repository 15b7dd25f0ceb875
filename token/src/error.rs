use mintgate_types::{Address, Amount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient token balance for {holder}: need {needed}, have {available}")]
    InsufficientBalance {
        holder: Address,
        needed: Amount,
        available: Amount,
    },

    #[error("amount must be non-zero")]
    InvalidAmount,

    #[error("unauthorized: {caller}")]
    Unauthorized { caller: Address },

    #[error("token messages do not accept funds")]
    UnexpectedFunds,

    #[error("token arithmetic overflow")]
    Overflow,

    #[error("invalid token info: {0}")]
    InvalidTokenInfo(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
