use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;

impl Repository {
    /// Restore `file_name` from the active commit; the stage is left untouched
    pub fn checkout_file(&self, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let (_, head) = self.head_commit()?;
        self.restore_file(&head, file_name)
    }

    /// Restore `file_name` from the commit `commit_id` names, which may be an unambiguous prefix
    pub fn checkout_commit_file(&self, commit_id: &str, file_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let (_, commit) = self.graph().lookup(commit_id)?;
        self.restore_file(&commit, file_name)
    }

    /// Make `branch_name` active and replace the working tree with its files
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_name = self.existing_branch(branch_name, GitletError::NoSuchBranch)?;
        if self.refs().is_active_branch(&branch_name)? {
            return Err(GitletError::AlreadyOnBranch.into());
        }

        let (_, current) = self.head_commit()?;
        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or(GitletError::NoSuchBranch)?;
        let target = self.graph().load(&target_oid)?;

        self.migrate_to(&current, &target)?;
        self.refs().switch(&branch_name)
    }

    fn restore_file(&self, commit: &Commit, file_name: &str) -> anyhow::Result<()> {
        let file_name = self
            .workspace()
            .normalize_name(file_name)
            .map_err(|_| GitletError::FileNotInCommit)?;
        let oid = commit
            .tracked(&file_name)
            .ok_or(GitletError::FileNotInCommit)?;

        let content = self.database().get(oid)?;
        self.workspace().write_file(&file_name, &content)
    }

    /// Replace the files of `current` in the working tree with those of `target` and clear
    /// the stage
    ///
    /// Nothing is written if an untracked file would be overwritten.
    pub(crate) fn migrate_to(&self, current: &Commit, target: &Commit) -> anyhow::Result<()> {
        let migration = Migration::between(current.tracks(), target.tracks());
        if !migration.is_empty() {
            migration.check_conflicts(self.workspace(), current.tracks())?;
            migration.apply(self.database(), self.workspace())?;
        }

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()
    }
}
