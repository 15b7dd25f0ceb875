//! Nullable infrastructure for deterministic testing.
//!
//! The bank ledger is the only external dependency of the host. This crate
//! provides a stand-in that:
//! - Behaves exactly like the in-memory reference bank by default
//! - Can be told to fail chosen primitives
//! - Records every mutating primitive it was asked to run
//!
//! Usage: hand a [`NullLedger`] to the host in tests that exercise rollback.

pub mod ledger;

pub use ledger::{NullLedger, Primitive};
