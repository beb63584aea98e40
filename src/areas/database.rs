//! Content-addressed object database
//!
//! Blobs live under `.gitlet/objects/blobs` and commits under `.gitlet/objects/commits`, each
//! keyed by its id. A blob id is the digest of raw file content, so it can equal a commit id;
//! the separate areas keep the two from shadowing each other. Each file holds the
//! zlib-compressed `<type> <size>\0<body>` form of the object.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw file content as a blob and return its id
    pub fn put(&self, content: Bytes) -> anyhow::Result<ObjectId> {
        self.store(&Blob::new(content))
    }

    /// Read back the content previously stored with [`Database::put`]
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.load_blob(object_id)?.into_content())
    }

    /// Write `object` under its id unless an object with that id is already present
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.object_path(object.object_type(), &object_id);

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    fn area_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.area())
    }

    fn object_path(&self, object_type: ObjectType, object_id: &ObjectId) -> PathBuf {
        self.area_path(object_type).join(object_id.to_path())
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.object_path(object_type, object_id).is_file()
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_object_as_bytes(ObjectType::Blob, object_id)?;
        Blob::deserialize(object_reader)
    }

    /// Load a commit and check that its content still hashes to `object_id`
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as_bytes(ObjectType::Commit, object_id)?;
        let commit = Commit::deserialize(object_reader)
            .with_context(|| format!("Corrupt commit object {object_id}"))?;

        let actual_id = commit.object_id()?;
        if &actual_id != object_id {
            anyhow::bail!("commit object {object_id} hashes to {actual_id}");
        }

        Ok(commit)
    }

    fn parse_object_as_bytes(
        &self,
        expected_type: ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<impl BufRead> {
        let object_path = self.object_path(expected_type, object_id);
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;
        if object_type != expected_type {
            anyhow::bail!("object {object_id} is a {object_type}, not a {expected_type}");
        }

        Ok(object_reader)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;
        file.sync_all().context(format!(
            "Unable to flush object file {}",
            temp_object_path.display()
        ))?;

        // rename into place so the object appears atomically
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Every id stored in the area for `object_type`, in ascending order
    pub fn list_objects(&self, object_type: ObjectType) -> anyhow::Result<Vec<ObjectId>> {
        let mut object_ids = WalkDir::new(self.area_path(object_type))
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let dir_name = entry.path().parent()?.file_name()?.to_str()?;
                let file_name = entry.file_name().to_str()?;
                ObjectId::try_parse(format!("{dir_name}{file_name}")).ok()
            })
            .collect::<Vec<_>>();
        object_ids.sort();

        Ok(object_ids)
    }

    /// Find all objects of `object_type` whose id starts with the given prefix.
    ///
    /// For prefixes of two or more characters only the matching fan-out directory is read;
    /// shorter prefixes fall back to a scan of the whole store.
    pub fn find_objects_by_prefix(
        &self,
        object_type: ObjectType,
        prefix: &str,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();

        if prefix.len() < 2 {
            return Ok(self
                .list_objects(object_type)?
                .into_iter()
                .filter(|oid| oid.as_ref().starts_with(&prefix))
                .collect());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.area_path(object_type).join(dir_name);
        let mut matches = Vec::new();

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)
                .with_context(|| format!("Unable to list objects in {}", dir_path.display()))?
            {
                let file_name = entry?.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix)
                    && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
                {
                    matches.push(oid);
                }
            }
        }
        matches.sort();

        Ok(matches)
    }
}
