//! Mapping of file-info records onto nodes

use crate::config::MapperConfig;
use crate::error::MapperError;
use crate::file_info::FileInfoRecord;
use chrono::{DateTime, Utc};
use fs_view::{join_path, FileNode, FolderNode, Node, NodeData};
use identity::{CurrentUserProvider, UserId};
use router::RemoteUrlGenerator;
use tracing::{debug, warn};

/// Remote service under which user files are served
pub const DAV_FILES_SERVICE: &str = "dav/files";

/// Server-side root of a user's file space, `/<owner>/files`
pub fn user_file_space_root(owner: &str) -> String {
    format!("/{}/files", owner)
}

/// Front-end root of a user's file space, `/files/<owner>`
pub fn frontend_root(owner: &str) -> String {
    format!("/files/{}", owner)
}

/// Converts epoch seconds to a UTC timestamp with millisecond precision
///
/// Returns `None` when the value cannot be represented.
pub fn modified_at_from_epoch_seconds(seconds: i64) -> Option<DateTime<Utc>> {
    seconds
        .checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
}

/// Maps a single record using the default configuration
///
/// `owner` defaults to the current user when absent or empty.
pub fn map_file_info_to_node(
    file_info: &FileInfoRecord,
    owner: Option<&str>,
    users: &dyn CurrentUserProvider,
    urls: &dyn RemoteUrlGenerator,
) -> Result<Node, MapperError> {
    let owner = resolve_owner(owner, users)?;
    map_record(file_info, &owner, urls, &MapperConfig::default())
}

/// Node mapper bound to its collaborators
pub struct NodeMapper<U, G> {
    users: U,
    urls: G,
    config: MapperConfig,
}

impl<U: CurrentUserProvider, G: RemoteUrlGenerator> NodeMapper<U, G> {
    /// Creates a mapper with the default configuration
    pub fn new(users: U, urls: G) -> Self {
        Self {
            users,
            urls,
            config: MapperConfig::default(),
        }
    }

    /// Replaces the configuration
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Maps one record
    ///
    /// `owner` defaults to the current user when absent or empty.
    pub fn map(&self, file_info: &FileInfoRecord, owner: Option<&str>) -> Result<Node, MapperError> {
        let owner = resolve_owner(owner, &self.users)?;
        map_record(file_info, &owner, &self.urls, &self.config)
    }

    /// Maps a directory listing
    ///
    /// The owner is resolved once for the whole listing. The first failing
    /// record aborts the call.
    pub fn map_all(
        &self,
        records: &[FileInfoRecord],
        owner: Option<&str>,
    ) -> Result<Vec<Node>, MapperError> {
        let owner = resolve_owner(owner, &self.users)?;
        records
            .iter()
            .map(|record| map_record(record, &owner, &self.urls, &self.config))
            .collect()
    }
}

fn resolve_owner(
    owner: Option<&str>,
    users: &dyn CurrentUserProvider,
) -> Result<UserId, MapperError> {
    match owner {
        Some(owner) if !owner.is_empty() => Ok(UserId::new(owner)),
        _ => users
            .current_user()
            .map(|user| user.uid)
            .ok_or(MapperError::NoAuthenticatedUser),
    }
}

fn map_record(
    file_info: &FileInfoRecord,
    owner: &UserId,
    urls: &dyn RemoteUrlGenerator,
    config: &MapperConfig,
) -> Result<Node, MapperError> {
    let expected_root = user_file_space_root(owner.as_str());
    if file_info.top_level_folder != expected_root {
        debug!(
            file_id = %file_info.file_id,
            path = %file_info.path,
            top_level_folder = %file_info.top_level_folder,
            expected_root = %expected_root,
            "rejecting entry outside of the user file space"
        );
        return Err(MapperError::OutOfScopeLocation {
            path: file_info.path.clone(),
            expected_root,
        });
    }

    if !file_info.entry_type.is_known() {
        if config.strict_entry_types {
            return Err(MapperError::UnknownEntryType {
                path: file_info.path.clone(),
                entry_type: file_info.entry_type.to_string(),
            });
        }
        warn!(
            file_id = %file_info.file_id,
            entry_type = %file_info.entry_type,
            "unknown entry type, mapping as folder"
        );
    }

    let modified_at = modified_at_from_epoch_seconds(file_info.last_modified);
    if modified_at.is_none() {
        warn!(
            file_id = %file_info.file_id,
            lastmod = file_info.last_modified,
            "modification time out of range"
        );
    }

    let service = join_path(&[DAV_FILES_SERVICE, owner.as_str(), &file_info.relative_path]);
    let data = NodeData {
        id: file_info.file_id,
        source: urls.generate_remote_url(&service),
        root: frontend_root(owner.as_str()),
        mime: file_info.mime_type.clone(),
        modified_at,
        owner: owner.clone(),
        size: file_info.size,
        permissions: file_info.permissions,
        attributes: file_info.to_attributes(),
    };

    let node = if file_info.entry_type.is_file() {
        Node::File(FileNode::new(data))
    } else {
        Node::Folder(FolderNode::new(data))
    };

    debug!(
        file_id = %file_info.file_id,
        owner = %owner,
        kind = %node.kind(),
        "mapped file info to node"
    );
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{EntryType, FileId, Permission};
    use identity::{CurrentUser, NoCurrentUser, StaticUserProvider};
    use router::ServerRemoteUrl;
    use serde_json::Map;

    fn create_test_record(owner: &str, relative_path: &str, entry_type: EntryType) -> FileInfoRecord {
        FileInfoRecord {
            file_id: FileId::new(42),
            path: format!("/{}/files/{}", owner, relative_path),
            top_level_folder: user_file_space_root(owner),
            relative_path: relative_path.to_string(),
            base_name: fs_view::basename(relative_path).to_string(),
            last_modified: 1_700_000_000,
            mime_type: "text/plain".to_string(),
            size: 10,
            entry_type,
            has_preview: false,
            permissions: Permission::from_bits(27),
            mount_type: "local".to_string(),
            etag: "abc".to_string(),
            extra: Map::new(),
        }
    }

    fn create_test_router() -> ServerRemoteUrl {
        ServerRemoteUrl::new("https://cloud.example.com").unwrap()
    }

    #[test]
    fn test_roots() {
        assert_eq!(user_file_space_root("alice"), "/alice/files");
        assert_eq!(frontend_root("alice"), "/files/alice");
    }

    #[test]
    fn test_modified_at_is_thousandfold() {
        let modified_at = modified_at_from_epoch_seconds(1_700_000_000).unwrap();
        assert_eq!(modified_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_modified_at_negative_epoch() {
        let modified_at = modified_at_from_epoch_seconds(-1).unwrap();
        assert_eq!(modified_at.timestamp_millis(), -1000);
    }

    #[test]
    fn test_modified_at_out_of_range() {
        assert!(modified_at_from_epoch_seconds(i64::MAX).is_none());
        assert!(modified_at_from_epoch_seconds(i64::MAX / 1000).is_none());
    }

    #[test]
    fn test_explicit_owner_maps_file() {
        let record = create_test_record("alice", "docs/a.txt", EntryType::File);
        let node = map_file_info_to_node(&record, Some("alice"), &NoCurrentUser, &create_test_router())
            .unwrap();

        assert!(node.is_file());
        let data = node.data();
        assert_eq!(data.id, FileId::new(42));
        assert_eq!(data.root, "/files/alice");
        assert_eq!(data.owner, UserId::new("alice"));
        assert_eq!(
            data.source,
            "https://cloud.example.com/remote.php/dav/files/alice/docs/a.txt"
        );
    }

    #[test]
    fn test_empty_owner_falls_back_to_current_user() {
        let record = create_test_record("bob", "a.txt", EntryType::File);
        let users = StaticUserProvider::uid("bob");
        let node = map_file_info_to_node(&record, Some(""), &users, &create_test_router()).unwrap();
        assert_eq!(node.data().owner.as_str(), "bob");
    }

    #[test]
    fn test_explicit_owner_takes_precedence() {
        let record = create_test_record("alice", "a.txt", EntryType::File);
        let users = StaticUserProvider::new(CurrentUser::new("bob"));
        let node = map_file_info_to_node(&record, Some("alice"), &users, &create_test_router())
            .unwrap();
        assert_eq!(node.data().owner.as_str(), "alice");
    }

    #[test]
    fn test_no_user_fails() {
        let record = create_test_record("alice", "a.txt", EntryType::File);
        let result = map_file_info_to_node(&record, None, &NoCurrentUser, &create_test_router());
        assert_eq!(result, Err(MapperError::NoAuthenticatedUser));
    }

    #[test]
    fn test_out_of_scope_carries_context() {
        let record = create_test_record("alice", "a.txt", EntryType::File);
        let err = map_file_info_to_node(&record, Some("mallory"), &NoCurrentUser, &create_test_router())
            .unwrap_err();
        assert_eq!(
            err,
            MapperError::OutOfScopeLocation {
                path: "/alice/files/a.txt".to_string(),
                expected_root: "/mallory/files".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "/alice/files/a.txt is located outside of the front end user file space /mallory/files"
        );
    }

    #[test]
    fn test_top_level_folder_compared_exactly() {
        let mut record = create_test_record("alice", "a.txt", EntryType::File);
        record.top_level_folder = "/alice/files/".to_string();
        let result = map_file_info_to_node(&record, Some("alice"), &NoCurrentUser, &create_test_router());
        assert!(matches!(result, Err(MapperError::OutOfScopeLocation { .. })));
    }

    #[test]
    fn test_user_file_space_root_maps_to_folder() {
        let mut record = create_test_record("alice", "", EntryType::Folder);
        record.path = "/alice/files".to_string();
        let node = map_file_info_to_node(&record, Some("alice"), &NoCurrentUser, &create_test_router())
            .unwrap();

        assert!(node.is_folder());
        assert_eq!(
            node.data().source,
            "https://cloud.example.com/remote.php/dav/files/alice"
        );
        assert_eq!(node.path(), "/");
        assert_eq!(node.dirname(), "/");
    }

    #[test]
    fn test_mapper_keeps_config() {
        let mapper = NodeMapper::new(NoCurrentUser, create_test_router());
        assert_eq!(mapper.config(), &MapperConfig::default());

        let mapper = mapper.with_config(MapperConfig::strict());
        assert!(mapper.config().strict_entry_types);
    }

    #[test]
    fn test_unknown_type_is_folder_by_default() {
        let record = create_test_record("alice", "link", EntryType::from("symlink"));
        let mapper = NodeMapper::new(NoCurrentUser, create_test_router());
        let node = mapper.map(&record, Some("alice")).unwrap();
        assert!(node.is_folder());
    }

    #[test]
    fn test_unknown_type_rejected_when_strict() {
        let record = create_test_record("alice", "link", EntryType::from("symlink"));
        let mapper =
            NodeMapper::new(NoCurrentUser, create_test_router()).with_config(MapperConfig::strict());
        assert_eq!(
            mapper.map(&record, Some("alice")),
            Err(MapperError::UnknownEntryType {
                path: "/alice/files/link".to_string(),
                entry_type: "symlink".to_string(),
            })
        );
    }

    #[test]
    fn test_strict_mode_accepts_folders() {
        let record = create_test_record("alice", "docs", EntryType::Folder);
        let mapper =
            NodeMapper::new(NoCurrentUser, create_test_router()).with_config(MapperConfig::strict());
        assert!(mapper.map(&record, Some("alice")).unwrap().is_folder());
    }

    #[test]
    fn test_out_of_range_mtime_still_maps() {
        let mut record = create_test_record("alice", "a.txt", EntryType::File);
        record.last_modified = i64::MAX;
        let node = map_file_info_to_node(&record, Some("alice"), &NoCurrentUser, &create_test_router())
            .unwrap();
        assert!(node.data().modified_at.is_none());
    }
}
