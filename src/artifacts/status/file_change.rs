use std::fmt;

/// State of a working file relative to the active commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceState {
    /// Tracked and identical to the committed blob
    Clean,
    /// Tracked but the content differs from the committed blob
    Modified,
    /// Not tracked by the active commit
    Untracked,
}

/// A change in the working tree that has not been staged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnstagedChange {
    Modified,
    Deleted,
}

impl fmt::Display for UnstagedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnstagedChange::Modified => write!(f, "modified"),
            UnstagedChange::Deleted => write!(f, "deleted"),
        }
    }
}
