use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        if message.trim().is_empty() {
            return Err(GitletError::EmptyMessage.into());
        }

        if self.index().is_empty() {
            return Err(GitletError::NothingToCommit.into());
        }

        let (head_oid, head) = self.head_commit()?;
        self.commit_staged(message, (&head_oid, &head), None)?;

        Ok(())
    }

    /// Turn the stage into a commit on top of `parent`, advance the active branch and clear
    /// the stage
    ///
    /// The commit is persisted before any pointer references it.
    pub(crate) fn commit_staged(
        &self,
        message: &str,
        parent: (&ObjectId, &Commit),
        merge_parent: Option<&ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let graph = self.graph();

        let commit = graph.create(
            message,
            parent,
            merge_parent,
            &self.index(),
            self.workspace(),
        )?;
        let commit_oid = graph.persist(&commit)?;
        self.refs().advance(&commit_oid)?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()?;

        tracing::debug!(oid = %commit_oid, tracked = commit.tracks().len(), "created commit");

        Ok(commit_oid)
    }
}
