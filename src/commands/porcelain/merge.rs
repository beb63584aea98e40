use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::core::error::GitletError;
use crate::artifacts::merge::resolution::{Resolution, conflict_content, resolve_tracks};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, Tracks};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

/// Working tree and stage changes of a three-way merge
struct MergePlan {
    migration: Migration,
    additions: Vec<(String, ObjectId)>,
    removals: Vec<String>,
    conflict_blobs: Vec<Blob>,
}

impl MergePlan {
    fn has_conflicts(&self) -> bool {
        !self.conflict_blobs.is_empty()
    }

    fn stages_nothing(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }
}

impl Repository {
    /// Merge the tip of `branch_name` into the active branch
    pub fn merge(&self, branch_name: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let target_branch = self.existing_branch(branch_name, GitletError::BranchNotFound)?;
        let active_branch = self.refs().active_branch()?;
        if target_branch == active_branch {
            return Err(GitletError::MergeWithSelf.into());
        }

        let (current_oid, current) = self.head_commit()?;
        let target_oid = self
            .refs()
            .read_branch(&target_branch)?
            .ok_or(GitletError::BranchNotFound)?;
        let target = self.graph().load(&target_oid)?;

        let split_oid = self
            .graph()
            .split_point(&current_oid, &target_oid)?
            .with_context(|| format!("{current_oid} and {target_oid} share no history"))?;
        tracing::debug!(
            current = %current_oid,
            target = %target_oid,
            split = %split_oid,
            "found split point"
        );

        if split_oid == current_oid {
            self.migrate_to(&current, &target)?;
            self.refs().advance(&target_oid)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(());
        }

        if split_oid == target_oid {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(());
        }

        if !self.index().is_empty() {
            return Err(GitletError::UncommittedChanges.into());
        }

        let split = self.graph().load(&split_oid)?;
        let plan = self.plan_merge(split.tracks(), current.tracks(), target.tracks())?;
        plan.migration.check_conflicts(self.workspace(), current.tracks())?;
        if plan.stages_nothing() {
            return Err(GitletError::NothingToCommit.into());
        }

        for blob in &plan.conflict_blobs {
            self.database().store(blob)?;
        }
        plan.migration.apply(self.database(), self.workspace())?;

        {
            let mut index = self.index_mut();
            for (file_name, oid) in &plan.additions {
                index.stage_addition(file_name, oid.clone());
            }
            for file_name in &plan.removals {
                index.stage_removal(file_name);
            }
        }

        let message = format!("Merged {target_branch} into {active_branch}.");
        self.commit_staged(&message, (&current_oid, &current), Some(&target_oid))?;

        if plan.has_conflicts() {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(())
    }

    /// Turn the per-file resolutions into working tree actions and stage entries
    ///
    /// Nothing is stored or written here; conflict blobs are only built.
    fn plan_merge(
        &self,
        split: &Tracks,
        current: &Tracks,
        target: &Tracks,
    ) -> anyhow::Result<MergePlan> {
        let mut plan = MergePlan {
            migration: Migration::default(),
            additions: Vec::new(),
            removals: Vec::new(),
            conflict_blobs: Vec::new(),
        };

        for (file_name, resolution) in resolve_tracks(split, current, target) {
            let write_action = if current.contains_key(&file_name) {
                ActionType::Modify
            } else {
                ActionType::Add
            };

            match resolution {
                Resolution::Keep => {}
                Resolution::TakeTarget(Some(oid)) => {
                    plan.migration.record(write_action, &file_name, Some(oid.clone()));
                    plan.additions.push((file_name, oid));
                }
                Resolution::TakeTarget(None) => {
                    plan.migration.record(ActionType::Delete, &file_name, None);
                    plan.removals.push(file_name);
                }
                Resolution::Conflict {
                    current: current_oid,
                    target: target_oid,
                } => {
                    let blob = Blob::new(conflict_content(
                        self.blob_content(current_oid.as_ref())?.as_deref(),
                        self.blob_content(target_oid.as_ref())?.as_deref(),
                    ));
                    let oid = blob.object_id()?;
                    tracing::debug!(file = %file_name, oid = %oid, "merge conflict");

                    plan.migration.record(write_action, &file_name, Some(oid.clone()));
                    plan.additions.push((file_name, oid));
                    plan.conflict_blobs.push(blob);
                }
            }
        }

        Ok(plan)
    }

    fn blob_content(&self, oid: Option<&ObjectId>) -> anyhow::Result<Option<Vec<u8>>> {
        oid.map(|oid| self.database().get(oid).map(|content| content.to_vec()))
            .transpose()
    }
}
