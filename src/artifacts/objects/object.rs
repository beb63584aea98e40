use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;
use std::io::Write;

/// Persisted form of an object, envelope included
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Inverse of [`Packable`]; the envelope has already been consumed from `reader`
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// The bytes the object's identity is derived from
    fn identity_bytes(&self) -> Result<Bytes>;

    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::digest(&self.identity_bytes()?))
    }
}

/// Prefix `body` with the `<type> <size>\0` envelope
pub fn envelope(object_type: &ObjectType, body: &[u8]) -> Result<Bytes> {
    let mut object_bytes = Vec::with_capacity(body.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), body.len());
    object_bytes.write_all(header.as_bytes())?;
    object_bytes.write_all(body)?;

    Ok(Bytes::from(object_bytes))
}
