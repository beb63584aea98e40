use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Tracks;

/// Working files unknown to the current commit that an operation is about to overwrite
pub fn untracked_in_the_way<'n>(
    workspace: &Workspace,
    current: &Tracks,
    incoming: impl IntoIterator<Item = &'n str>,
) -> Vec<String> {
    incoming
        .into_iter()
        .filter(|file_name| !current.contains_key(*file_name) && workspace.exists(file_name))
        .map(str::to_string)
        .collect()
}

/// Fail with [`GitletError::UntrackedFileInTheWay`] if any incoming file would clobber an
/// untracked working file
pub fn ensure_nothing_in_the_way<'n>(
    workspace: &Workspace,
    current: &Tracks,
    incoming: impl IntoIterator<Item = &'n str>,
) -> anyhow::Result<()> {
    let blocked = untracked_in_the_way(workspace, current, incoming);

    if blocked.is_empty() {
        Ok(())
    } else {
        tracing::debug!(files = ?blocked, "untracked files in the way");
        Err(GitletError::UntrackedFileInTheWay.into())
    }
}
