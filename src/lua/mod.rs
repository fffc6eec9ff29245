//! Lua integration
//!
//! Installs the utility table into interpreter states owned by the host.

pub mod bindings;

pub use bindings::install;
