use mintgate_types::{Address, Amount, Denom, TypesError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient {denom} balance for {holder}: need {needed}, have {available}")]
    InsufficientBalance {
        holder: Address,
        denom: Denom,
        needed: Amount,
        available: Amount,
    },

    #[error("{caller} is not the admin of {denom} (admin: {})", .admin.as_ref().map(|a| a.as_str()).unwrap_or("none"))]
    NotDenomAdmin {
        denom: Denom,
        caller: Address,
        admin: Option<Address>,
    },

    #[error("denom {0} does not exist")]
    UnknownDenom(Denom),

    #[error("denom {0} already exists")]
    DenomExists(Denom),

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("arithmetic overflow for {0}")]
    Overflow(Denom),

    #[error(transparent)]
    Types(#[from] TypesError),

    #[error("injected failure: {0}")]
    Injected(String),
}
