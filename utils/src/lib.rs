//! Shared utilities for mintgate.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
