use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;

/// Size of the length prefix in front of every stored filename
pub const NAME_LENGTH_SIZE: usize = 2;

/// Size of a binary blob id
pub const OID_SIZE: usize = 20;

/// Encode `name` as a u16 length followed by its bytes
pub fn pack_name(name: &str, bytes: &mut Vec<u8>) -> anyhow::Result<()> {
    let length = u16::try_from(name.len())
        .with_context(|| format!("filename too long to stage: {name}"))?;
    bytes.write_u16::<byteorder::NetworkEndian>(length)?;
    bytes.extend_from_slice(name.as_bytes());

    Ok(())
}

pub fn name_length(prefix: &[u8]) -> usize {
    byteorder::NetworkEndian::read_u16(prefix) as usize
}

pub fn unpack_name(bytes: Bytes) -> anyhow::Result<String> {
    String::from_utf8(bytes.to_vec()).context("Staged filename is not valid UTF-8")
}

/// Encode a staged addition: binary blob id, then the filename
pub fn pack_addition(name: &str, oid: &ObjectId) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(OID_SIZE + NAME_LENGTH_SIZE + name.len());
    oid.write_h40_to(&mut bytes)?;
    pack_name(name, &mut bytes)?;

    Ok(bytes)
}

/// Encode a staged removal: just the filename
pub fn pack_removal(name: &str) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(NAME_LENGTH_SIZE + name.len());
    pack_name(name, &mut bytes)?;

    Ok(bytes)
}
