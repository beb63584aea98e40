//! Persisted storage areas of a repository
//!
//! - `database`: Content-addressed object store for blobs and commits
//! - `index`: Staging area of pending additions and removals
//! - `lock`: Exclusive lock held by mutating commands
//! - `refs`: Branch pointers, the active branch and the head cache
//! - `repository`: The repository context tying the areas together
//! - `workspace`: Working directory file operations

pub(crate) mod database;
pub(crate) mod index;
pub(crate) mod lock;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;
