//! Token minting authority registry.
//!
//! The registry holds ledger admin rights over a set of factory denoms and
//! lends them out to a whitelist of principals:
//! - whitelisted principals may mint, burn from holders and force-transfer
//! - the manager curates the whitelist and the administered set, and may
//!   hand a denom's admin rights away
//! - anyone may burn administered coins they attach to a call
//!
//! Custody is never assumed: every privileged operation re-checks that the
//! ledger still lists the registry as the denom's admin.

pub mod config;
pub mod contract;
pub mod error;
pub mod msg;

pub use config::RegistryConfig;
pub use contract::Registry;
pub use error::RegistryError;
pub use msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
