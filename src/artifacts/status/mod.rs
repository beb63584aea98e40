//! Working tree status inspection
//!
//! - `file_change`: per-file states and the kinds of unstaged change
//! - `inspector`: compares working files against the active commit and the stage
//! - `status_info`: the report printed by `status`

pub mod file_change;
pub mod inspector;
pub mod status_info;
