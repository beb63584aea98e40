use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::{Context, ensure};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

/// Stream wrapper that feeds every byte read or written into a running SHA-1
///
/// The stage file ends with the digest of everything before it.
pub struct Checksum<S> {
    stream: S,
    digest: Sha1,
}

impl<S> Checksum<S> {
    pub(crate) fn new(stream: S) -> Self {
        Checksum {
            stream,
            digest: Sha1::new(),
        }
    }

    fn current(&self) -> [u8; CHECKSUM_SIZE] {
        self.digest.clone().finalize().into()
    }
}

impl<S: Read> Checksum<S> {
    pub(crate) fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.stream
            .read_exact(&mut buffer)
            .context("stage file ended early")?;
        self.digest.update(&buffer);

        Ok(buffer.into())
    }

    /// Compare the trailing digest with the one computed over the bytes read so far
    pub(crate) fn verify(&mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.stream
            .read_exact(&mut stored)
            .context("stage file has no checksum")?;

        ensure!(stored == self.current(), "stage file checksum mismatch");
        Ok(())
    }
}

impl<S: Write> Checksum<S> {
    pub(crate) fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.stream.write_all(data)?;
        self.digest.update(data);
        Ok(())
    }

    pub(crate) fn write_checksum(&mut self) -> anyhow::Result<()> {
        let trailer = self.current();
        self.stream
            .write_all(&trailer)
            .context("unable to write stage checksum")
    }
}
