//! Gitlet: a small local version-control engine
//!
//! Snapshots of a working directory are stored as content-addressed commits in `.gitlet/`,
//! organised into named branches that can be checked out, reset and merged.

pub mod areas;
pub mod artifacts;
pub mod commands;
