//! User-facing failure conditions
//!
//! Every variant describes an expected condition that aborts a command before it mutates
//! any repository state. Anything else travelling through `anyhow::Error` is treated as a
//! fatal I/O failure by the binary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("File does not exist.")]
    FileNotFound,
    #[error("Please enter a commit message.")]
    EmptyMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No reason to remove the file.")]
    NothingToRemove,
    #[error("No commit with that id exists.")]
    CommitNotFound,
    #[error("Commit id {0} is ambiguous.")]
    AmbiguousCommitId(String),
    #[error("File does not exist in that commit.")]
    FileNotInCommit,
    #[error("No such branch exists.")]
    NoSuchBranch,
    #[error("A branch with that name does not exist.")]
    BranchNotFound,
    #[error("A branch with that name already exists.")]
    BranchExists,
    #[error("Invalid branch name: {0}.")]
    InvalidBranchName(String),
    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,
    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,
    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,
    #[error("Found no commit with that message.")]
    NoMessageMatch,
    #[error("Incorrect operands.")]
    IncorrectOperands,
}

/// Returns the user-facing condition carried by `error`, if any.
pub fn user_error(error: &anyhow::Error) -> Option<&GitletError> {
    error.downcast_ref::<GitletError>()
}
