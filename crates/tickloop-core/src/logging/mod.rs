//! Logging utilities.
//!
//! Logger initialization for binaries embedding the loop. Library code only
//! talks to the `log` facade.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging, resolve_filter};
