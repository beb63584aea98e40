//! Porcelain commands (user-facing operations)
//!
//! Each command is an inherent method on [`crate::areas::repository::Repository`]. Mutating
//! commands hold the repository lock for their whole run and check every user-facing failure
//! before they touch any state.
//!
//! ## Commands
//!
//! - `init`: Create a repository with its root commit and `master` branch
//! - `add` / `rm`: Stage a file for addition or removal
//! - `commit`: Record the stage as a new commit
//! - `log` / `global_log` / `find`: Inspect history
//! - `branch` / `rm_branch`: Create or delete branch pointers
//! - `status`: Show branches, the stage and working tree changes
//! - `checkout`: Restore a file or switch branches
//! - `reset`: Move the active branch to an arbitrary commit
//! - `merge`: Three-way merge another branch into the active one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
