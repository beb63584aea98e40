use crate::areas::lock::RepositoryLock;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .gitlet/objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .gitlet/refs/heads directory")?;

        let _lock = RepositoryLock::acquire(&self.lock_path())?;

        let root_oid = self.graph().persist(&Commit::root())?;
        self.refs()
            .init(&BranchName::default_branch(), &root_oid)
            .context("Failed to create initial HEAD reference")?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()?;

        tracing::debug!(path = %self.path().display(), root = %root_oid, "initialized repository");

        Ok(())
    }
}
