//! Contract-tracked fungible token.
//!
//! Balances live inside the contract rather than on the bank ledger. Moving
//! tokens into another contract goes through [`ExecuteMsg::Send`], which
//! credits the target and then invokes its `receive` hook with a
//! [`ReceiveMsg`] naming the original sender.

pub mod contract;
pub mod error;
pub mod msg;

pub use contract::{TokenInfo, TrackedToken};
pub use error::TokenError;
pub use msg::{BalanceResponse, ExecuteMsg, InitialBalance, InstantiateMsg, QueryMsg, ReceiveMsg};
