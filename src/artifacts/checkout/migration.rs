//! Working tree migration
//!
//! A [`Migration`] is a plan of file writes and deletions. It is built either from two
//! commits (checkout, reset) or action by action (merge), checked against untracked files,
//! and only then applied. Deletions run first so a later write can reuse a freed path.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::conflict::ensure_nothing_in_the_way;
use crate::artifacts::objects::commit::Tracks;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};

/// Type of file system action required for a migration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create a file the current commit does not track
    Add,
    /// Delete a tracked file
    Delete,
    /// Overwrite a tracked file
    Modify,
}

/// Planned actions grouped by type; the blob id is `None` for deletions
pub type ActionsSet = HashMap<ActionType, BTreeMap<String, Option<ObjectId>>>;

#[derive(Debug, Clone)]
pub struct Migration {
    actions: ActionsSet,
}

impl Default for Migration {
    fn default() -> Self {
        Self {
            actions: HashMap::from([
                (ActionType::Add, BTreeMap::new()),
                (ActionType::Delete, BTreeMap::new()),
                (ActionType::Modify, BTreeMap::new()),
            ]),
        }
    }
}

impl Migration {
    /// Plan the move from the files tracked in `current` to those tracked in `target`
    ///
    /// Every file of `target` is written, so local edits to files both commits track are
    /// overwritten too.
    pub fn between(current: &Tracks, target: &Tracks) -> Self {
        let mut migration = Self::default();

        for (file_name, oid) in target {
            let action = if current.contains_key(file_name) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            migration.record(action, file_name, Some(oid.clone()));
        }

        for file_name in current.keys() {
            if !target.contains_key(file_name) {
                migration.record(ActionType::Delete, file_name, None);
            }
        }

        migration
    }

    pub fn record(&mut self, action: ActionType, file_name: &str, oid: Option<ObjectId>) {
        self.actions
            .entry(action)
            .or_default()
            .insert(file_name.to_string(), oid);
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.values().all(BTreeMap::is_empty)
    }

    /// Names of the files the migration writes
    pub fn incoming(&self) -> impl Iterator<Item = &str> {
        [ActionType::Add, ActionType::Modify]
            .into_iter()
            .filter_map(|action| self.actions.get(&action))
            .flat_map(|files| files.keys().map(String::as_str))
    }

    /// Fail if a write would overwrite a file `current` does not track
    pub fn check_conflicts(&self, workspace: &Workspace, current: &Tracks) -> anyhow::Result<()> {
        ensure_nothing_in_the_way(workspace, current, self.incoming())
    }

    pub fn apply(&self, database: &Database, workspace: &Workspace) -> anyhow::Result<()> {
        self.apply_action_set(database, workspace, ActionType::Delete)?;
        self.apply_action_set(database, workspace, ActionType::Modify)?;
        self.apply_action_set(database, workspace, ActionType::Add)?;

        Ok(())
    }

    fn apply_action_set(
        &self,
        database: &Database,
        workspace: &Workspace,
        action: ActionType,
    ) -> anyhow::Result<()> {
        let Some(files) = self.actions.get(&action) else {
            return Ok(());
        };

        for (file_name, oid) in files {
            match (&action, oid) {
                (ActionType::Delete, _) | (_, None) => workspace.remove_file(file_name)?,
                (ActionType::Add | ActionType::Modify, Some(oid)) => {
                    let data = database
                        .get(oid)
                        .with_context(|| format!("Failed to load blob for {file_name}"))?;
                    workspace.write_file(file_name, &data)?;
                }
            }
            tracing::debug!(file = %file_name, action = ?action, "applied migration action");
        }

        Ok(())
    }
}
