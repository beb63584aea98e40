//! Moving the working tree from one commit to another
//!
//! Every change is planned and checked for untracked files in the way before the working
//! directory is touched.

pub mod conflict;
pub mod migration;
