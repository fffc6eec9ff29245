//! Host integration
//!
//! C ABI mirror of the host's plugin interface, a safe handle over it, and
//! the log backend that writes into the host's log.

pub mod abi;
pub mod api;
pub mod logger;

pub use api::{HostApi, HostVersion, ScriptHost, ScriptLock};
pub use logger::setup_logging;
