//! Logger setup for hosts and tools using this backend.
//!
//! The backend itself only emits through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
