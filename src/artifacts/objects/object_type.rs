use std::io::BufRead;

/// Kind of a stored object; blobs and commits never share a storage area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub const ALL: [ObjectType; 2] = [ObjectType::Blob, ObjectType::Commit];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Subdirectory of the object database holding this kind
    pub fn area(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blobs",
            ObjectType::Commit => "commits",
        }
    }

    /// Read the `<type> <size>\0` envelope, leaving `reader` at the start of the body
    pub fn parse_object_type(reader: &mut impl BufRead) -> anyhow::Result<ObjectType> {
        let mut kind = Vec::new();
        reader.read_until(b' ', &mut kind)?;
        if kind.pop() != Some(b' ') {
            anyhow::bail!("object envelope has no type");
        }

        let mut size = Vec::new();
        reader.read_until(b'\0', &mut size)?;
        if size.pop() != Some(b'\0') {
            anyhow::bail!("object envelope has no size terminator");
        }

        std::str::from_utf8(&kind)?.parse()
    }
}

impl std::str::FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(kind: &str) -> anyhow::Result<Self> {
        ObjectType::ALL
            .into_iter()
            .find(|object_type| object_type.as_str() == kind)
            .ok_or_else(|| anyhow::anyhow!("unknown object type {kind:?}"))
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
