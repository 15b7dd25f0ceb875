//! Bank ledger interface.
//!
//! The ledger is the external service that holds every balance and records
//! which principal administers each factory denomination. Nothing else in
//! the workspace keeps a copy of a balance; all reads go through
//! [`LedgerQuery`] and all writes through [`Ledger`].
//!
//! [`MemoryLedger`] is the in-process reference bank used by the host.

pub mod error;
pub mod ledger;
pub mod memory;

pub use error::LedgerError;
pub use ledger::{Ledger, LedgerQuery};
pub use memory::MemoryLedger;
