//! Entry type tag reported by the server

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a file-listing entry
///
/// The server sends `"file"` or `"folder"`. Any other tag is kept verbatim in
/// [`EntryType::Other`] so that it survives a round trip unchanged; consumers
/// decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    /// A regular file
    File,
    /// A folder
    Folder,
    /// Any tag other than `file` or `folder`
    Other(String),
}

impl EntryType {
    /// Returns the wire tag
    pub fn as_str(&self) -> &str {
        match self {
            EntryType::File => "file",
            EntryType::Folder => "folder",
            EntryType::Other(tag) => tag,
        }
    }

    /// Returns true for the `file` tag
    pub fn is_file(&self) -> bool {
        matches!(self, EntryType::File)
    }

    /// Returns true if the tag is one of the two known values
    pub fn is_known(&self) -> bool {
        !matches!(self, EntryType::Other(_))
    }
}

impl From<String> for EntryType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "file" => EntryType::File,
            "folder" => EntryType::Folder,
            _ => EntryType::Other(tag),
        }
    }
}

impl From<&str> for EntryType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<EntryType> for String {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
