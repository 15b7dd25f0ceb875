//! Fundamental types for mintgate.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! principal addresses, denomination identifiers, raw amounts and coins.

pub mod address;
pub mod amount;
pub mod coin;
pub mod denom;
pub mod error;

pub use address::Address;
pub use amount::Amount;
pub use coin::{pretty_coins, Coin};
pub use denom::Denom;
pub use error::TypesError;
