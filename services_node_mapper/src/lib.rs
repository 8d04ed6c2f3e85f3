//! # Node Mapper Service
//!
//! Converts raw file-info records from the server into display nodes.
//!
//! ## Philosophy
//!
//! - **Owner-scoped**: A record is only mapped if it lies in the owner's own
//!   file space; anything else is rejected, never coerced
//! - **Explicit collaborators**: The current user and URL generation are passed
//!   in, so mapping is a pure function of its inputs
//! - **All or nothing**: A call yields a complete node or an error
//!
//! ## Example
//!
//! ```
//! use identity::NoCurrentUser;
//! use router::ServerRemoteUrl;
//! use services_node_mapper::{FileInfoRecord, NodeMapper};
//!
//! let record: FileInfoRecord = serde_json::from_str(r#"{
//!     "fileid": 42, "path": "/alice/files/docs/a.txt", "topLevelFolder": "/alice/files",
//!     "relativePath": "docs/a.txt", "basename": "a.txt", "lastmod": 1700000000,
//!     "mime": "text/plain", "size": 10, "type": "file", "hasPreview": false,
//!     "permissions": 27, "mount-type": "local", "etag": "abc"
//! }"#).unwrap();
//!
//! let mapper = NodeMapper::new(NoCurrentUser, ServerRemoteUrl::new("https://cloud.example.com").unwrap());
//! let node = mapper.map(&record, Some("alice")).unwrap();
//!
//! assert!(node.is_file());
//! assert_eq!(node.data().root, "/files/alice");
//! assert_eq!(node.path(), "/docs/a.txt");
//! ```

pub mod config;
pub mod error;
pub mod file_info;
pub mod mapper;

pub use config::MapperConfig;
pub use error::MapperError;
pub use file_info::FileInfoRecord;
pub use mapper::{
    frontend_root, map_file_info_to_node, modified_at_from_epoch_seconds, user_file_space_root,
    NodeMapper, DAV_FILES_SERVICE,
};
