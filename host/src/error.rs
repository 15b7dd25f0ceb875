use mintgate_conversion::ConversionError;
use mintgate_ledger::LedgerError;
use mintgate_registry::RegistryError;
use mintgate_token::TokenError;
use mintgate_types::{Address, TypesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("types error: {0}")]
    Types(#[from] TypesError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("no contract at {0}")]
    ContractNotFound(Address),

    #[error("{contract} does not recognize the message: {reason}")]
    UnrecognizedMessage { contract: Address, reason: String },

    #[error("request exceeded its {resource} budget of {limit}")]
    BudgetExceeded { resource: &'static str, limit: usize },

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("config error: {0}")]
    Config(String),
}

impl HostError {
    /// The ledger failure behind this error, whether the ledger rejected a
    /// primitive or a contract reported it while checking custody.
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        match self {
            Self::Ledger(e) => Some(e),
            Self::Registry(RegistryError::Ledger(e)) => Some(e),
            _ => None,
        }
    }
}
