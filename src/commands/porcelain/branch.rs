use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::GitletError;

impl Repository {
    /// Create `branch_name` pointing at the active commit without switching to it
    pub fn branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head = self.refs().head()?;

        self.refs().create_branch(&branch_name, &head)
    }

    pub fn rm_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_name = self.existing_branch(branch_name, GitletError::BranchNotFound)?;
        if self.refs().is_active_branch(&branch_name)? {
            return Err(GitletError::RemoveCurrentBranch.into());
        }

        self.refs().delete_branch(&branch_name)?;

        Ok(())
    }

    /// Parse `branch_name` and check that it exists, failing with `missing` otherwise
    pub(crate) fn existing_branch(
        &self,
        branch_name: &str,
        missing: GitletError,
    ) -> anyhow::Result<BranchName> {
        match BranchName::try_parse(branch_name.to_string()) {
            Ok(branch_name) if self.refs().branch_exists(&branch_name) => Ok(branch_name),
            _ => Err(missing.into()),
        }
    }
}
