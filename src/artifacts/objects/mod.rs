//! Content-addressed object types
//!
//! Every stored object is identified by the SHA-1 digest of its identity bytes:
//!
//! - **Blob**: one file's contents; identity bytes are the raw contents
//! - **Commit**: an immutable snapshot node; identity bytes are its canonical encoding
//!
//! Both share one persisted envelope, `<type> <size>\0<body>`, which never feeds the
//! digest itself.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
