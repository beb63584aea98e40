use crate::areas::repository::Repository;

impl Repository {
    /// Move the active branch to `commit_id` and replace the working tree with its files
    pub fn reset(&self, commit_id: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let (target_oid, target) = self.graph().lookup(commit_id)?;
        let (_, current) = self.head_commit()?;

        self.migrate_to(&current, &target)?;
        self.refs().advance(&target_oid)
    }
}
