//! Mapper configuration

use serde::{Deserialize, Serialize};

/// Tunables of the node mapper
///
/// Missing fields deserialize to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapperConfig {
    /// Reject entry types other than `file` and `folder` instead of mapping
    /// them to folders
    pub strict_entry_types: bool,
}

impl MapperConfig {
    /// Configuration that rejects unknown entry types
    pub fn strict() -> Self {
        Self {
            strict_entry_types: true,
        }
    }
}
