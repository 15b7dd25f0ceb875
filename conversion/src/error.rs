use mintgate_types::Denom;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("amount must be non-zero")]
    InvalidAmount,

    #[error("wrong asset: expected {expected}, received {received}")]
    WrongAsset { expected: String, received: String },

    #[error("unrecognized hook payload: {0}")]
    UnrecognizedPayload(String),

    #[error("funds must not be attached to a token hook")]
    UnexpectedFunds,

    #[error("the conversion unit cannot be the mint recipient")]
    SelfCredit,

    #[error("invalid denom {denom}: {reason}")]
    InvalidDenom { denom: Denom, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}
