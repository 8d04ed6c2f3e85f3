//! Mapper errors

use thiserror::Error;

/// Error type for node mapping
///
/// Every variant is fatal for the record at hand; no partial node is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("No owner given and no authenticated user available")]
    NoAuthenticatedUser,

    #[error("{path} is located outside of the front end user file space {expected_root}")]
    OutOfScopeLocation {
        /// Server path of the rejected record
        path: String,
        /// File space root the record was expected under
        expected_root: String,
    },

    #[error("Unknown entry type {entry_type:?} for {path}")]
    UnknownEntryType { path: String, entry_type: String },
}
