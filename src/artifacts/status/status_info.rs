use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::UnstagedChange;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

/// Everything `status` reports, with every list sorted by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) active_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: Vec<String>,
    pub(crate) removed_files: Vec<String>,
    pub(crate) unstaged_changes: BTreeMap<String, UnstagedChange>,
    pub(crate) untracked_files: BTreeSet<String>,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn collect(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let (_, head) = self.repository.head_commit()?;
        let index = self.repository.index();
        let inspector = Inspector::new(self.repository.workspace());

        let working_files = self.repository.workspace().list_files()?;

        let candidates = head
            .tracks()
            .keys()
            .chain(index.additions().keys())
            .chain(working_files.iter())
            .collect::<BTreeSet<_>>();

        let mut unstaged_changes = BTreeMap::new();
        for file_name in candidates {
            if let Some(change) = inspector.unstaged_change(file_name, head.tracks(), &index)? {
                unstaged_changes.insert(file_name.clone(), change);
            }
        }

        let untracked_files = working_files
            .iter()
            .filter(|file_name| inspector.is_untracked(file_name, head.tracks(), &index))
            .cloned()
            .collect();

        Ok(StatusInfo {
            active_branch: refs.active_branch()?,
            branches: refs.list_branches()?,
            staged_files: index.additions().keys().cloned().collect(),
            removed_files: index.removals().iter().cloned().collect(),
            unstaged_changes,
            untracked_files,
        })
    }
}
