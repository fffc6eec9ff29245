//! File system storage management
//!
//! Handles the rename and recycle-bin operations exposed to scripts.

pub mod operations;

pub use operations::{remove_file, rename_file};
