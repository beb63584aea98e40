use crate::artifacts::objects::commit::Tracks;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};

pub const CONFLICT_START: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END: &str = ">>>>>>>\n";

/// What a merge does to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The current branch already holds the right version
    Keep,
    /// Adopt the target branch's version; `None` removes the file
    TakeTarget(Option<ObjectId>),
    /// Both sides changed the file in different ways
    Conflict {
        current: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Classify one file from its blob at the split point, the current tip and the target tip
pub fn classify(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    target: Option<&ObjectId>,
) -> Resolution {
    if current == target || target == split {
        Resolution::Keep
    } else if current == split {
        Resolution::TakeTarget(target.cloned())
    } else {
        Resolution::Conflict {
            current: current.cloned(),
            target: target.cloned(),
        }
    }
}

/// Classify every file tracked at any of the three commits, skipping files that stay as they are
pub fn resolve_tracks(
    split: &Tracks,
    current: &Tracks,
    target: &Tracks,
) -> BTreeMap<String, Resolution> {
    let file_names = split
        .keys()
        .chain(current.keys())
        .chain(target.keys())
        .collect::<BTreeSet<_>>();

    file_names
        .into_iter()
        .filter_map(|file_name| {
            match classify(
                split.get(file_name),
                current.get(file_name),
                target.get(file_name),
            ) {
                Resolution::Keep => None,
                resolution => Some((file_name.clone(), resolution)),
            }
        })
        .collect()
}

/// Content of the blob recorded for a conflicted file; an absent side contributes nothing
pub fn conflict_content(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let target = target.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CONFLICT_START.len()
            + current.len()
            + CONFLICT_SEPARATOR.len()
            + target.len()
            + CONFLICT_END.len(),
    );
    content.extend_from_slice(CONFLICT_START.as_bytes());
    content.extend_from_slice(current);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    content.extend_from_slice(target);
    content.extend_from_slice(CONFLICT_END.as_bytes());

    Bytes::from(content)
}
