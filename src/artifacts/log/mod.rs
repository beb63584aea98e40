//! Commit history traversal for `log`
//!
//! - `rev_list`: first-parent walk from a commit back to the root commit

pub mod rev_list;
