//! Branch pointers and HEAD
//!
//! ## Layout
//!
//! - `refs/heads/<name>`: the commit id a branch points at
//! - `HEAD`: `ref: refs/heads/<name>` naming the active branch
//! - `HEAD_COMMIT`: cached id of the commit the active branch resolves to
//!
//! The branch file is authoritative. Pointer files are replaced through a temp file and a
//! rename, branch first and cache second, so a crash can at worst leave a stale cache, which
//! [`Refs::reconcile_head`] repairs.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::core::error::GitletError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.gitlet`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

pub const HEAD_COMMIT_NAME: &str = "HEAD_COMMIT";

impl Refs {
    /// Create the default branch at `root_oid` and make it active
    pub fn init(&self, default_branch: &BranchName, root_oid: &ObjectId) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.heads_path()).with_context(|| {
            format!("failed to create refs directory at {:?}", self.heads_path())
        })?;

        self.write_ref_file(&self.branch_path(default_branch), root_oid.as_ref())?;
        self.write_symref(default_branch)?;
        self.write_ref_file(&self.head_commit_path(), root_oid.as_ref())
    }

    /// Name of the branch `HEAD` points at
    pub fn active_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content.trim())
            .with_context(|| format!("HEAD does not name a branch: {}", content.trim()))?;

        BranchName::try_parse_sym_ref_name(&SymRefName::new(symref_match[1].to_string()))
    }

    pub fn is_active_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(&self.active_branch()? == branch_name)
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        self.read_ref_file(&branch_path).map(Some)
    }

    /// The commit the active branch resolves to
    ///
    /// Always read through the branch file. A cache that disagrees is only reported here
    /// and rewritten by [`Refs::reconcile_head`].
    pub fn head(&self) -> anyhow::Result<ObjectId> {
        let active_branch = self.active_branch()?;
        let head = self
            .read_branch(&active_branch)?
            .with_context(|| format!("active branch {active_branch} has no commit"))?;

        if self.cached_head()?.as_ref() != Some(&head) {
            tracing::warn!(branch = %active_branch, oid = %head, "head cache is stale");
        }

        Ok(head)
    }

    /// Rewrite the head cache if it no longer matches the active branch
    pub fn reconcile_head(&self) -> anyhow::Result<()> {
        let active_branch = self.active_branch()?;
        let Some(head) = self.read_branch(&active_branch)? else {
            anyhow::bail!("active branch {active_branch} has no commit");
        };

        if self.cached_head()?.as_ref() != Some(&head) {
            tracing::warn!(branch = %active_branch, oid = %head, "repairing head cache");
            self.write_ref_file(&self.head_commit_path(), head.as_ref())?;
        }

        Ok(())
    }

    /// Point the active branch, then the head cache, at `oid`
    pub fn advance(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let active_branch = self.active_branch()?;

        self.write_ref_file(&self.branch_path(&active_branch), oid.as_ref())?;
        self.write_ref_file(&self.head_commit_path(), oid.as_ref())?;
        tracing::debug!(branch = %active_branch, oid = %oid, "advanced branch");

        Ok(())
    }

    /// Make `branch_name` the active branch
    pub fn switch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let Some(tip) = self.read_branch(branch_name)? else {
            return Err(GitletError::NoSuchBranch.into());
        };

        self.write_symref(branch_name)?;
        self.write_ref_file(&self.head_commit_path(), tip.as_ref())?;
        tracing::debug!(branch = %branch_name, oid = %tip, "switched branch");

        Ok(())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        if branch_path.exists() {
            return Err(GitletError::BranchExists.into());
        }

        self.write_ref_file(&branch_path, source_oid.as_ref())?;
        tracing::debug!(branch = %name, oid = %source_oid, "created branch");

        Ok(())
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.branch_path(name);

        let Some(oid) = self.read_branch(name)? else {
            return Err(GitletError::BranchNotFound.into());
        };

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        tracing::debug!(branch = %name, oid = %oid, "deleted branch");

        Ok(oid)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn cached_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_commit_path = self.head_commit_path();
        if !head_commit_path.is_file() {
            return Ok(None);
        }

        // an unreadable cache is simply stale
        Ok(self.read_ref_file(&head_commit_path).ok())
    }

    fn write_symref(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let sym_ref = SymRefName::from(branch_name);
        self.write_ref_file(
            &self.head_path(),
            &format!("ref: {}", sym_ref.as_ref_path()),
        )
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<ObjectId> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;

        ObjectId::try_parse(content.trim().to_string())
            .with_context(|| format!("corrupt ref file at {:?}", path))
    }

    /// Replace the content of a pointer file in one step
    fn write_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let parent = path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?;
        std::fs::create_dir_all(parent)?;

        let temp_path = parent.join(format!(".tmp-ref-{}", rand::random::<u32>()));
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("failed to open ref file at {:?}", temp_path))?;
        ref_file.write_all(raw_ref.as_bytes())?;
        ref_file.write_all(b"\n")?;
        ref_file.sync_all()?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to update ref file at {:?}", path))?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(SymRefName::from(branch_name).as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn head_commit_path(&self) -> Box<Path> {
        self.path.join(HEAD_COMMIT_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
