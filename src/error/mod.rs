//! Error handling
//!
//! Defines error types and handling for the plugin.

pub mod handlers;
pub mod types;

pub use types::*;
