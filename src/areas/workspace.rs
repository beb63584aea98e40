use crate::artifacts::core::error::GitletError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the metadata directory, never part of the working tree
pub const METADATA_DIR: &str = ".gitlet";

/// Working directory files, addressed by `/`-separated names relative to the root
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that `file_name` stays inside the working tree and normalise its separators
    pub fn normalize_name(&self, file_name: &str) -> anyhow::Result<String> {
        let path = Path::new(file_name);
        let mut parts = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => return Err(GitletError::FileNotFound.into()),
            }
        }

        if parts.is_empty() || parts[0] == METADATA_DIR {
            return Err(GitletError::FileNotFound.into());
        }

        Ok(parts.join("/"))
    }

    /// Every regular file under the root, sorted, excluding the metadata directory
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to walk working directory {}", self.path.display())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = self.relative_name(entry.path()) {
                files.push(name);
            }
        }
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy() == METADATA_DIR)
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative_path = path.strip_prefix(self.path.as_ref()).ok()?;

        Some(
            relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }

    fn full_path(&self, file_name: &str) -> PathBuf {
        file_name
            .split('/')
            .fold(self.path.to_path_buf(), |path, part| path.join(part))
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.full_path(file_name).is_file()
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.full_path(file_name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// Write `content` to `file_name`, creating parent directories as needed
    pub fn write_file(&self, file_name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.full_path(file_name);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path).with_context(|| {
                format!("Failed to remove existing directory: {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete `file_name` if present and prune directories it leaves empty
    pub fn remove_file(&self, file_name: &str) -> anyhow::Result<()> {
        let file_path = self.full_path(file_name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(&file_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
