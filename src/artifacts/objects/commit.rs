//! Commit object
//!
//! Commits are immutable snapshot nodes. They contain:
//! - A message and a creation timestamp
//! - Up to two parent ids (the second only for merge commits)
//! - A tracking table mapping each tracked filename to a blob id
//!
//! ## Identity
//!
//! A commit's id is the digest of [`Commit::canonical_encoding`], a length-prefixed encoding of
//! its fields in a fixed order. The persisted format below is independent from it, so
//! changing how commits are stored can never change history ids.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-1 id>
//! parent <parent-2 id>
//! date <rfc3339 timestamp>
//! track <blob id> <filename>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, envelope};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Tracked filename mapped to the blob holding its contents, ordered by name
pub type Tracks = BTreeMap<String, ObjectId>;

/// Message of the commit every repository starts from
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Overrides the timestamp stamped on new commits
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";

const READABLE_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// Slim representation of a commit
///
/// Contains only what graph walks need: the id, the parent ids and the timestamp.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
    pub timestamp: DateTime<FixedOffset>,
}

impl PartialOrd for SlimCommit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlimCommit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    message: String,
    timestamp: DateTime<FixedOffset>,
    /// First parent; absent only for the root commit
    parent: Option<ObjectId>,
    /// Second parent; present only for merge commits
    merge_parent: Option<ObjectId>,
    tracks: Tracks,
}

impl Commit {
    /// The single constructor for every kind of commit.
    ///
    /// A root commit has no parents, a regular commit has `parent` only, and a merge commit
    /// has both.
    pub fn new(
        message: String,
        tracks: Tracks,
        parent: Option<ObjectId>,
        merge_parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        debug_assert!(merge_parent.is_none() || parent.is_some());

        Commit {
            message,
            timestamp,
            parent,
            merge_parent,
            tracks,
        }
    }

    /// The commit created by `init`: empty tracks, no parents, stamped at the Unix epoch
    pub fn root() -> Self {
        Self::new(
            ROOT_COMMIT_MESSAGE.to_string(),
            Tracks::new(),
            None,
            None,
            DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset(),
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form, e.g. "Thu Jan 01 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_DATE_FORMAT).to_string()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.merge_parent.as_ref()
    }

    pub fn parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parent.iter().chain(self.merge_parent.iter())
    }

    pub fn is_merge(&self) -> bool {
        self.merge_parent.is_some()
    }

    pub fn tracks(&self) -> &Tracks {
        &self.tracks
    }

    pub fn tracked(&self, file_name: &str) -> Option<&ObjectId> {
        self.tracks.get(file_name)
    }

    pub fn is_tracking(&self, file_name: &str) -> bool {
        self.tracks.contains_key(file_name)
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents().cloned().collect(),
            timestamp: self.timestamp,
        }
    }

    /// Encoding used solely for hashing.
    ///
    /// Fields are written in a fixed order (message, timestamp, parent, merge parent, then
    /// each track as name and blob), each as `<tag> <length>\0<value>`.
    pub fn canonical_encoding(&self) -> Bytes {
        let mut encoding = Vec::new();

        encode_field(&mut encoding, "message", self.message.as_bytes());
        encode_field(
            &mut encoding,
            "timestamp",
            self.timestamp
                .to_rfc3339_opts(SecondsFormat::Nanos, true)
                .as_bytes(),
        );
        encode_field(
            &mut encoding,
            "parent",
            self.parent.as_ref().map_or("", |oid| oid.as_ref()).as_bytes(),
        );
        encode_field(
            &mut encoding,
            "merge-parent",
            self.merge_parent
                .as_ref()
                .map_or("", |oid| oid.as_ref())
                .as_bytes(),
        );
        for (file_name, blob_oid) in &self.tracks {
            encode_field(&mut encoding, "track", file_name.as_bytes());
            encode_field(&mut encoding, "blob", blob_oid.as_ref().as_bytes());
        }

        Bytes::from(encoding)
    }
}

fn encode_field(encoding: &mut Vec<u8>, tag: &str, value: &[u8]) {
    encoding.extend_from_slice(format!("{tag} {}\0", value.len()).as_bytes());
    encoding.extend_from_slice(value);
}

/// Read the commit timestamp from `GITLET_COMMIT_DATE`, falling back to the current time
pub fn commit_timestamp() -> anyhow::Result<DateTime<FixedOffset>> {
    match std::env::var(COMMIT_DATE_ENV) {
        Ok(date_str) => DateTime::parse_from_rfc2822(&date_str)
            .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
            .with_context(|| format!("invalid {COMMIT_DATE_ENV} value: {date_str}")),
        Err(_) => Ok(chrono::Local::now().fixed_offset()),
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut header = vec![];

        for parent in self.parents() {
            header.push(format!("parent {}", parent.as_ref()));
        }
        header.push(format!(
            "date {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
        ));
        for (file_name, blob_oid) in &self.tracks {
            header.push(format!("track {} {}", blob_oid.as_ref(), file_name));
        }

        let body = format!("{}\n\n{}", header.join("\n"), self.message);

        envelope(&self.object_type(), body.as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut tracks = Tracks::new();

        for line in header.lines() {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(date) = line.strip_prefix("date ") {
                timestamp = Some(
                    DateTime::parse_from_rfc3339(date)
                        .context("Invalid commit object: invalid date line")?,
                );
            } else if let Some(track) = line.strip_prefix("track ") {
                let (blob_oid, file_name) = track
                    .split_once(' ')
                    .context("Invalid commit object: invalid track line")?;
                tracks.insert(
                    file_name.to_string(),
                    ObjectId::try_parse(blob_oid.to_string())?,
                );
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        if parents.len() > 2 {
            anyhow::bail!("Invalid commit object: too many parents");
        }
        let mut parents = parents.into_iter();

        Ok(Self::new(
            message.to_string(),
            tracks,
            parents.next(),
            parents.next(),
            timestamp.context("Invalid commit object: missing date line")?,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn identity_bytes(&self) -> anyhow::Result<Bytes> {
        Ok(self.canonical_encoding())
    }
}
