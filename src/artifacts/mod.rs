//! Value types and algorithms behind the commands
//!
//! - `branch`: Branch name validation
//! - `checkout`: Working tree migrations and the untracked file guard
//! - `core`: User-facing error conditions
//! - `graph`: Commit creation, lookup and history walks
//! - `index`: On-disk layout of the stage file
//! - `log`: First-parent history iteration
//! - `merge`: Split point search and three-way file classification
//! - `objects`: Object ids, blobs and commits
//! - `status`: Per-file working tree inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod graph;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
