use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::status::file_change::WorkspaceState;
use crate::artifacts::status::inspector::Inspector;

impl Repository {
    /// Stage the working copy of `file_name` for the next commit
    ///
    /// A file whose content matches the active commit is taken off the stage instead.
    pub fn add(&self, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let file_name = self.workspace().normalize_name(file_name)?;
        if !self.workspace().exists(&file_name) {
            return Err(GitletError::FileNotFound.into());
        }

        let (_, head) = self.head_commit()?;
        let inspector = Inspector::new(self.workspace());

        match inspector.workspace_state(&file_name, head.tracks())? {
            WorkspaceState::Clean => {
                tracing::debug!(file = %file_name, "content matches active commit, unstaging");
                self.index_mut().unstage(&file_name);
            }
            WorkspaceState::Modified | WorkspaceState::Untracked => {
                let blob = Blob::new(self.workspace().read_file(&file_name)?);
                let blob_id = self.database().store(&blob)?;
                self.index_mut().stage_addition(&file_name, blob_id);
            }
        }

        self.flush_index()
    }
}
