use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Tracks;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{UnstagedChange, WorkspaceState};
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
}

impl<'r> Inspector<'r> {
    /// Blob id the working copy of `file_name` would be stored under
    pub fn working_oid(&self, file_name: &str) -> anyhow::Result<Option<ObjectId>> {
        if !self.workspace.exists(file_name) {
            return Ok(None);
        }

        let content = self.workspace.read_file(file_name)?;
        Ok(Some(ObjectId::digest(&content)))
    }

    /// Compare the working copy of a present file against the active commit
    pub fn workspace_state(&self, file_name: &str, head: &Tracks) -> anyhow::Result<WorkspaceState> {
        let Some(committed) = head.get(file_name) else {
            return Ok(WorkspaceState::Untracked);
        };

        match self.working_oid(file_name)? {
            Some(oid) if &oid == committed => Ok(WorkspaceState::Clean),
            _ => Ok(WorkspaceState::Modified),
        }
    }

    /// Unstaged change for a file, if any
    ///
    /// A staged addition is compared against the working copy; otherwise a tracked file is
    /// compared against the commit unless it is staged for removal.
    pub fn unstaged_change(
        &self,
        file_name: &str,
        head: &Tracks,
        stage: &Index,
    ) -> anyhow::Result<Option<UnstagedChange>> {
        let expected = match stage.staged_addition(file_name) {
            Some(staged) => staged,
            None if stage.is_staged_for_removal(file_name) => return Ok(None),
            None => match head.get(file_name) {
                Some(committed) => committed,
                None => return Ok(None),
            },
        };

        match self.working_oid(file_name)? {
            None => Ok(Some(UnstagedChange::Deleted)),
            Some(oid) if &oid != expected => Ok(Some(UnstagedChange::Modified)),
            Some(_) => Ok(None),
        }
    }

    /// A present file the next commit would not pick up on its own
    pub fn is_untracked(&self, file_name: &str, head: &Tracks, stage: &Index) -> bool {
        stage.staged_addition(file_name).is_none()
            && (!head.contains_key(file_name) || stage.is_staged_for_removal(file_name))
    }
}
