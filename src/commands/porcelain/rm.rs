use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;

impl Repository {
    /// Unstage `file_name`, and if the active commit tracks it, delete it and stage its removal
    pub fn rm(&self, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let file_name = self
            .workspace()
            .normalize_name(file_name)
            .map_err(|_| GitletError::NothingToRemove)?;
        let (_, head) = self.head_commit()?;

        let is_staged = self.index().staged_addition(&file_name).is_some();
        let is_tracked = head.is_tracking(&file_name);

        if !is_staged && !is_tracked {
            return Err(GitletError::NothingToRemove.into());
        }

        if is_staged {
            self.index_mut().unstage_addition(&file_name);
        }

        if is_tracked {
            self.workspace().remove_file(&file_name)?;
            self.index_mut().stage_removal(&file_name);
        }

        self.flush_index()
    }
}
