//! Sandbox path handling
//!
//! Handles weak canonicalization and the containment checks every
//! filesystem operation goes through.

pub mod canonical;
pub mod results;
pub mod validation;

pub use results::ResolvedPath;
pub use validation::Sandbox;
