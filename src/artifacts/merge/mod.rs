//! Three-way merge support
//!
//! - `merge_base`: split point (best common ancestor) search
//! - `resolution`: per-file classification and conflict synthesis

pub mod merge_base;
pub mod resolution;
