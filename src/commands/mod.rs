//! Command implementations
//!
//! All commands live under `porcelain`; they compose the storage areas and artifacts into
//! the user-facing operations.

pub mod porcelain;
