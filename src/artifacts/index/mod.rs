//! Stage (index) file format
//!
//! The stage records pending additions and removals between commits.
//!
//! ## File Format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "STGE" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Addition count (4 bytes)
//!   - Removal count (4 bytes)
//!
//! Additions (variable length):
//!   - Blob id (20 bytes)
//!   - Name length (2 bytes) followed by the name
//!
//! Removals (variable length):
//!   - Name length (2 bytes) followed by the name
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;
pub mod index_header;
pub mod stage_entry;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of stage header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying stage files
pub const SIGNATURE: &str = "STGE";

/// Stage file format version
pub const VERSION: u32 = 1;
