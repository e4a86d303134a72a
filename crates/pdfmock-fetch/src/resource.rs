use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single request for bytes.
///
/// The location is a path or URL for the file and network backends, and the
/// logical CMap name (`Adobe-Japan1-UCS2`) for the CMap backend. Built per
/// request and never reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    location: String,
}

impl ResourceDescriptor {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Request for a CMap by name.
    pub fn cmap(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// How CMap bytes are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CMapCompression {
    /// Plain PostScript CMap text.
    None,
    /// Packed binary CMap (`.bcmap`).
    Binary,
}

impl fmt::Display for CMapCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// CMap payload plus its encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CMapData {
    pub data: Bytes,
    pub compression: CMapCompression,
}

/// What a provider hands back. Ownership moves to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    Bytes(Bytes),
    CMap(CMapData),
}

impl Resource {
    /// The raw buffer, whichever variant this is.
    pub fn data(&self) -> &Bytes {
        match self {
            Self::Bytes(b) => b,
            Self::CMap(c) => &c.data,
        }
    }

    pub fn len(&self) -> usize {
        self.data().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Bytes(b) => b,
            Self::CMap(c) => c.data,
        }
    }

    pub fn as_cmap(&self) -> Option<&CMapData> {
        match self {
            Self::CMap(c) => Some(c),
            Self::Bytes(_) => None,
        }
    }
}
