//! Conversion unit.
//!
//! A unit accepts one source asset, either a [`Source::Native`] ledger coin
//! attached as call value or a [`Source::Tracked`] token delivered through
//! the token's `send` hook. It disposes of the asset and asks its registry to
//! mint the same amount of the target denom to the depositor. The unit never
//! holds the target denom and keeps no balances of its own.

pub mod config;
pub mod contract;
pub mod error;
pub mod msg;
pub mod pipeline;

pub use config::{ConversionConfig, Source};
pub use contract::ConversionUnit;
pub use error::ConversionError;
pub use msg::{ExecuteMsg, HookPayload, InstantiateMsg, QueryMsg};
pub use pipeline::{Arrival, Deposit, Pipeline, Stage};
