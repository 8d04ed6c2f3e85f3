//! Raw file-info records as delivered by the server

use core_types::{EntryType, FileId, Permission};
use fs_view::{Attributes, HAS_PREVIEW_ATTRIBUTE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat file-metadata record
///
/// Field names on the wire follow the server's JSON keys. Keys this struct
/// does not know are kept in `extra` so that nothing the server sent is lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfoRecord {
    #[serde(rename = "fileid")]
    pub file_id: FileId,
    /// Absolute server-side path, e.g. `/alice/files/docs/a.txt`
    pub path: String,
    /// Root of the owner's file space, e.g. `/alice/files`
    #[serde(rename = "topLevelFolder")]
    pub top_level_folder: String,
    /// Path relative to `top_level_folder`
    #[serde(rename = "relativePath")]
    pub relative_path: String,
    #[serde(rename = "basename")]
    pub base_name: String,
    /// Modification time in seconds since the Unix epoch
    #[serde(rename = "lastmod")]
    pub last_modified: i64,
    #[serde(rename = "mime")]
    pub mime_type: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(rename = "hasPreview")]
    pub has_preview: bool,
    pub permissions: Permission,
    /// Storage backend hosting the entry
    #[serde(rename = "mount-type")]
    pub mount_type: String,
    pub etag: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileInfoRecord {
    /// Builds the node attribute map for this record
    ///
    /// The result holds every field under its wire name, the unknown extra
    /// keys, and the preview flag duplicated as `has-preview`.
    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = self.extra.clone();
        attributes.insert("fileid".to_string(), Value::from(self.file_id.get()));
        attributes.insert("path".to_string(), Value::from(self.path.clone()));
        attributes.insert(
            "topLevelFolder".to_string(),
            Value::from(self.top_level_folder.clone()),
        );
        attributes.insert(
            "relativePath".to_string(),
            Value::from(self.relative_path.clone()),
        );
        attributes.insert("basename".to_string(), Value::from(self.base_name.clone()));
        attributes.insert("lastmod".to_string(), Value::from(self.last_modified));
        attributes.insert("mime".to_string(), Value::from(self.mime_type.clone()));
        attributes.insert("size".to_string(), Value::from(self.size));
        attributes.insert(
            "type".to_string(),
            Value::from(self.entry_type.as_str().to_string()),
        );
        attributes.insert("hasPreview".to_string(), Value::from(self.has_preview));
        attributes.insert(
            "permissions".to_string(),
            Value::from(self.permissions.bits()),
        );
        attributes.insert("mount-type".to_string(), Value::from(self.mount_type.clone()));
        attributes.insert("etag".to_string(), Value::from(self.etag.clone()));
        attributes.insert(HAS_PREVIEW_ATTRIBUTE.to_string(), Value::from(self.has_preview));
        attributes
    }
}
