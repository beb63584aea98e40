use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

/// Exclusive advisory lock on `.gitlet/lock`, held while a command mutates the repository
///
/// Released when dropped.
#[derive(Debug)]
pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    /// Block until the lock at `path` is available
    pub fn acquire(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("failed to open lock file at {:?}", path))?;

        let guard = file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock repository at {:?}", path))?;
        tracing::debug!(path = %path.display(), "acquired repository lock");

        Ok(RepositoryLock { _guard: guard })
    }
}
