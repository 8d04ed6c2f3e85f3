//! Unique identifiers for file-index entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an entry in the server's file index
///
/// File IDs are assigned by the server and are unique within its file index.
/// They serialize as bare integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(u64);

impl FileId {
    /// Creates a file ID from the raw server value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw server value
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for FileId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
