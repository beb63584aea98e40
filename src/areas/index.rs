//! Staging area
//!
//! Holds the changes pending for the next commit: additions map a filename to the blob it
//! should be committed as, removals name files the next commit stops tracking. A filename is
//! never in both at once. See [`crate::artifacts::index`] for the on-disk layout.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::stage_entry::{
    NAME_LENGTH_SIZE, OID_SIZE, name_length, pack_addition, pack_removal, unpack_name,
};
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    path: Box<Path>,
    additions: BTreeMap<String, ObjectId>,
    removals: BTreeSet<String>,
    header: IndexHeader,
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeSet::new(),
            header: IndexHeader::empty(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn additions(&self) -> &BTreeMap<String, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeSet<String> {
        &self.removals
    }

    pub fn staged_addition(&self, file_name: &str) -> Option<&ObjectId> {
        self.additions.get(file_name)
    }

    pub fn is_staged_for_removal(&self, file_name: &str) -> bool {
        self.removals.contains(file_name)
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Record `file_name` to be committed as `oid`, dropping any pending removal
    pub fn stage_addition(&mut self, file_name: &str, oid: ObjectId) {
        self.removals.remove(file_name);
        self.additions.insert(file_name.to_string(), oid);
        self.changed = true;
    }

    /// Drop any pending addition and removal for `file_name`
    pub fn unstage(&mut self, file_name: &str) {
        let had_addition = self.additions.remove(file_name).is_some();
        let had_removal = self.removals.remove(file_name);
        self.changed |= had_addition || had_removal;
    }

    pub fn unstage_addition(&mut self, file_name: &str) -> bool {
        let removed = self.additions.remove(file_name).is_some();
        self.changed |= removed;
        removed
    }

    /// Mark `file_name` as untracked by the next commit, dropping any pending addition
    pub fn stage_removal(&mut self, file_name: &str) {
        self.additions.remove(file_name);
        self.removals.insert(file_name.to_string());
        self.changed = true;
    }

    /// Empty both additions and removals
    pub fn clear(&mut self) {
        self.changed |= !self.is_empty();
        self.additions.clear();
        self.removals.clear();
        self.header = IndexHeader::empty();
    }

    /// Load the stage from disk
    ///
    /// A missing or empty stage file is an empty stage. The trailing checksum is verified.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.additions.clear();
        self.removals.clear();
        self.header = IndexHeader::empty();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock.deref_mut());
        let header = self.parse_header(&mut reader)?;
        self.parse_additions(header.additions_count, &mut reader)?;
        self.parse_removals(header.removals_count, &mut reader)?;
        self.header = header;

        reader.verify()?;
        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "loaded stage"
        );

        Ok(())
    }

    fn parse_header(&self, reader: &mut Checksum<impl Read>) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::parse(&header_bytes)?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid stage file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported stage file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    fn parse_name(reader: &mut Checksum<impl Read>) -> anyhow::Result<String> {
        let length = name_length(&reader.read(NAME_LENGTH_SIZE)?);
        unpack_name(reader.read(length)?)
    }

    fn parse_additions(
        &mut self,
        count: u32,
        reader: &mut Checksum<impl Read>,
    ) -> anyhow::Result<()> {
        for _ in 0..count {
            let oid_bytes = reader.read(OID_SIZE)?;
            let oid = ObjectId::read_h40_from(&mut oid_bytes.as_ref())?;
            let file_name = Self::parse_name(reader)?;

            self.additions.insert(file_name, oid);
        }

        Ok(())
    }

    fn parse_removals(
        &mut self,
        count: u32,
        reader: &mut Checksum<impl Read>,
    ) -> anyhow::Result<()> {
        for _ in 0..count {
            let file_name = Self::parse_name(reader)?;
            self.removals.insert(file_name);
        }

        Ok(())
    }

    /// Persist the stage, replacing whatever the file held before
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if let Some(parent) = self.path().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock.deref_mut());

        self.header = IndexHeader {
            additions_count: self.additions.len() as u32,
            removals_count: self.removals.len() as u32,
            ..self.header.clone()
        };
        writer.write(&self.header.serialize()?)?;

        for (file_name, oid) in &self.additions {
            writer.write(&pack_addition(file_name, oid)?)?;
        }

        for file_name in &self.removals {
            writer.write(&pack_removal(file_name)?)?;
        }

        writer.write_checksum()?;
        self.changed = false;
        tracing::debug!(
            additions = self.additions.len(),
            removals = self.removals.len(),
            "wrote stage"
        );

        Ok(())
    }
}
