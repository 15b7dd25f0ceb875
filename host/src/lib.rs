//! Execution host for mintgate contracts.
//!
//! The host owns the bank ledger and every deployed contract. It serves one
//! request at a time, moves call-value funds before a handler runs, applies
//! the actions each handler returns depth-first, and restores the complete
//! pre-request state if anything along the way fails.

pub mod config;
pub mod contract;
pub mod error;
pub mod host;
pub mod persist;
pub mod spans;

pub use config::{GenesisBalance, GenesisConfig, GenesisDenom, HostConfig};
pub use contract::{Contract, ContractKind, InstantiateRequest};
pub use error::HostError;
pub use host::{Execution, Host, World};
