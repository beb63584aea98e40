use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::core::error::GitletError;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;

/// Everything a command needs to operate on one repository
///
/// All paths derive from the working directory root handed to [`Repository::new`].
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    color: bool,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve working directory {:?}", path))?;
        let metadata_path = path.join(METADATA_DIR);

        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            color: false,
        })
    }

    /// Enable or disable ANSI colours in command output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn lock_path(&self) -> Box<Path> {
        self.metadata_path().join("lock").into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Ref<'_, Index> {
        self.index.borrow()
    }

    pub fn index_mut(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn graph(&self) -> CommitGraph<'_> {
        CommitGraph::new(&self.database)
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir() && self.refs.head_path().is_file()
    }

    /// Load the stage for a read-only command
    pub fn open(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            return Err(GitletError::NotInitialized.into());
        }

        self.index.borrow_mut().rehydrate()
    }

    /// Take the repository lock and load the stage for a mutating command
    ///
    /// The head cache is brought back in line with the active branch before anything else runs.
    pub fn lock(&self) -> anyhow::Result<RepositoryLock> {
        if !self.is_initialized() {
            return Err(GitletError::NotInitialized.into());
        }

        let lock = RepositoryLock::acquire(&self.lock_path())?;
        self.refs.reconcile_head()?;
        self.index.borrow_mut().rehydrate()?;

        Ok(lock)
    }

    /// The active commit along with its id
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let head = self.refs.head()?;
        let commit = self.database.load_commit(&head)?;

        Ok((head, commit))
    }

    /// Persist the stage if a command changed it
    pub fn flush_index(&self) -> anyhow::Result<()> {
        let mut index = self.index.borrow_mut();
        if index.has_changed() {
            index.write_updates()?;
        }

        Ok(())
    }
}
