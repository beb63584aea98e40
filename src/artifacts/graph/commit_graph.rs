//! Commit graph operations over the object database
//!
//! Commits are immutable once stored. A commit can only name parents that already exist, so
//! the graph is acyclic and every traversal here terminates.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::GitletError;
use crate::artifacts::log::rev_list::FirstParentWalk;
use crate::artifacts::merge::merge_base::MergeBaseFinder;
use crate::artifacts::objects::commit::{Commit, SlimCommit, commit_timestamp};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use derive_new::new;
use std::collections::HashSet;

#[derive(Debug, new)]
pub struct CommitGraph<'d> {
    database: &'d Database,
}

impl<'d> CommitGraph<'d> {
    /// Build the commit that follows `parent` once `stage` is applied
    ///
    /// Tracked files missing from `workspace` are dropped even if they were never removed
    /// explicitly.
    pub fn create(
        &self,
        message: &str,
        parent: (&ObjectId, &Commit),
        merge_parent: Option<&ObjectId>,
        stage: &Index,
        workspace: &Workspace,
    ) -> anyhow::Result<Commit> {
        let (parent_oid, parent_commit) = parent;
        let mut tracks = parent_commit.tracks().clone();

        for (file_name, oid) in stage.additions() {
            tracks.insert(file_name.clone(), oid.clone());
        }

        for file_name in stage.removals() {
            tracks.remove(file_name);
        }

        tracks.retain(|file_name, _| {
            let present = workspace.exists(file_name);
            if !present {
                tracing::debug!(file = %file_name, "dropping file missing from working tree");
            }
            present
        });

        Ok(Commit::new(
            message.to_string(),
            tracks,
            Some(parent_oid.clone()),
            merge_parent.cloned(),
            commit_timestamp()?,
        ))
    }

    /// Store `commit`; nothing may reference it before this returns
    pub fn persist(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        self.database
            .store(commit)
            .context("Unable to persist commit")
    }

    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database.load_commit(oid)
    }

    /// Resolve a full commit id or an unambiguous prefix of one
    pub fn lookup(&self, id_or_prefix: &str) -> anyhow::Result<(ObjectId, Commit)> {
        if !ObjectId::is_valid_prefix(id_or_prefix) {
            return Err(GitletError::CommitNotFound.into());
        }

        let candidates = self
            .database
            .find_objects_by_prefix(ObjectType::Commit, id_or_prefix)?;

        match candidates.as_slice() {
            [] => Err(GitletError::CommitNotFound.into()),
            [oid] => Ok((oid.clone(), self.load(oid)?)),
            _ => Err(GitletError::AmbiguousCommitId(id_or_prefix.to_string()).into()),
        }
    }

    /// Every commit reachable from `oid` through either parent, `oid` included
    ///
    /// Plain reachability query on the graph. [`CommitGraph::split_point`] does not call it:
    /// the merge-base search paints both histories in a single walk instead.
    pub fn ancestors(&self, oid: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut visited = HashSet::new();
        let mut worklist = vec![oid.clone()];

        while let Some(commit_oid) = worklist.pop() {
            if !visited.insert(commit_oid.clone()) {
                continue;
            }

            let commit = self.load(&commit_oid)?;
            worklist.extend(
                commit
                    .parents()
                    .filter(|parent| !visited.contains(*parent))
                    .cloned(),
            );
        }

        Ok(visited)
    }

    /// Best common ancestor of two commits
    pub fn split_point(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let finder = MergeBaseFinder::new(|oid: &ObjectId| self.slim(oid));
        finder.find_merge_base(current, target)
    }

    pub fn slim(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        Ok(self.load(oid)?.to_slim(oid.clone()))
    }

    /// `start` and its first-parent ancestors, newest first
    pub fn first_parent_walk(&self, start: ObjectId) -> FirstParentWalk<'d> {
        FirstParentWalk::new(self.database, Some(start))
    }

    /// Every commit in the object database, ordered by id
    pub fn all_commits(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        self.database
            .list_objects(ObjectType::Commit)?
            .into_iter()
            .map(|oid| {
                let commit = self.load(&oid)?;
                Ok((oid, commit))
            })
            .collect()
    }
}
