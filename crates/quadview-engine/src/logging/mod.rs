//! Logger initialization.
//!
//! Everything in the engine logs through the `log` facade; this module only
//! wires up an `env_logger` backend for binaries that want one.

mod init;

pub use init::{LoggingConfig, init_logging};
