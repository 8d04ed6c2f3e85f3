//! Node types
//!
//! A node is the client-side representation of a file-listing entry. Files and
//! folders share one payload, [`NodeData`]; the variant only records which
//! kind of entry it is.

use crate::path;
use chrono::{DateTime, Utc};
use core_types::{FileId, Permission};
use identity::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form attributes attached to a node
///
/// Holds a full copy of the raw entry as the server sent it. Fields such as
/// `id` or `mime` therefore appear both here and on [`NodeData`]; the
/// duplication is intentional so display code can read either.
pub type Attributes = Map<String, Value>;

/// Attribute key under which the preview flag is exposed
pub const HAS_PREVIEW_ATTRIBUTE: &str = "has-preview";

/// Payload shared by file and folder nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Server file index ID
    pub id: FileId,
    /// Fully qualified URL of the remote resource
    pub source: String,
    /// Root of the owner's file space, e.g. `/files/alice`
    pub root: String,
    /// MIME type
    pub mime: String,
    /// Last modification time; `None` if the server value is out of range
    #[serde(rename = "mtime")]
    pub modified_at: Option<DateTime<Utc>>,
    /// Owner of the file space
    pub owner: UserId,
    /// Size in bytes
    pub size: u64,
    /// Permission bitmask
    pub permissions: Permission,
    /// Copy of the raw entry plus derived attributes
    pub attributes: Attributes,
}

/// Kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A regular file
    File,
    /// A folder
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Folder => write!(f, "folder"),
        }
    }
}

/// A file node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileNode(NodeData);

impl FileNode {
    /// Creates a file node from its payload
    pub fn new(data: NodeData) -> Self {
        Self(data)
    }

    /// Returns the payload
    pub fn data(&self) -> &NodeData {
        &self.0
    }

    /// Consumes the node, returning its payload
    pub fn into_data(self) -> NodeData {
        self.0
    }
}

/// A folder node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderNode(NodeData);

impl FolderNode {
    /// Creates a folder node from its payload
    pub fn new(data: NodeData) -> Self {
        Self(data)
    }

    /// Returns the payload
    pub fn data(&self) -> &NodeData {
        &self.0
    }

    /// Consumes the node, returning its payload
    pub fn into_data(self) -> NodeData {
        self.0
    }
}

/// A file or folder node
///
/// Serializes as the payload fields plus a `"type"` tag of `"file"` or
/// `"folder"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    /// Returns the shared payload
    pub fn data(&self) -> &NodeData {
        match self {
            Node::File(node) => node.data(),
            Node::Folder(node) => node.data(),
        }
    }

    /// Consumes the node, returning its payload
    pub fn into_data(self) -> NodeData {
        match self {
            Node::File(node) => node.into_data(),
            Node::Folder(node) => node.into_data(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind() == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == NodeKind::Folder
    }

    /// Path of the node inside its owner's file space
    ///
    /// This is the part of `source` following `root`, or `/` when nothing
    /// follows. If `root` does not occur in `source` as a whole path prefix,
    /// the full source is returned.
    pub fn path(&self) -> &str {
        let data = self.data();
        let source = data.source.as_str();
        let root = data.root.trim_end_matches('/');
        if root.is_empty() {
            return source;
        }

        for (idx, _) in source.match_indices(root) {
            let rest = &source[idx + root.len()..];
            if rest.is_empty() {
                return "/";
            }
            if rest.starts_with('/') {
                return rest;
            }
        }
        source
    }

    /// Final segment of [`Node::path`]
    pub fn basename(&self) -> &str {
        path::basename(self.path())
    }

    /// Parent of [`Node::path`]
    pub fn dirname(&self) -> &str {
        path::dirname(self.path())
    }

    /// Extension of the basename, without the dot
    pub fn extension(&self) -> Option<&str> {
        path::extension(self.path())
    }

    /// Looks up a raw attribute
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.data().attributes.get(key)
    }

    /// Whether the server can render a preview for this node
    pub fn has_preview(&self) -> bool {
        self.attribute(HAS_PREVIEW_ATTRIBUTE)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl From<FileNode> for Node {
    fn from(node: FileNode) -> Self {
        Node::File(node)
    }
}

impl From<FolderNode> for Node {
    fn from(node: FolderNode) -> Self {
        Node::Folder(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_data(source: &str) -> NodeData {
        let mut attributes = Attributes::new();
        attributes.insert(HAS_PREVIEW_ATTRIBUTE.to_string(), json!(true));
        NodeData {
            id: FileId::new(42),
            source: source.to_string(),
            root: "/files/alice".to_string(),
            mime: "text/plain".to_string(),
            modified_at: DateTime::from_timestamp_millis(1_700_000_000_000),
            owner: UserId::new("alice"),
            size: 10,
            permissions: Permission::from_bits(27),
            attributes,
        }
    }

    #[test]
    fn test_file_node_kind() {
        let node = Node::from(FileNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice/docs/a.txt",
        )));
        assert!(node.is_file());
        assert!(!node.is_folder());
        assert_eq!(node.kind(), NodeKind::File);
        assert_eq!(node.data().id, FileId::new(42));
    }

    #[test]
    fn test_folder_node_kind() {
        let node = Node::from(FolderNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice/docs",
        )));
        assert!(node.is_folder());
        assert_eq!(node.kind().to_string(), "folder");
    }

    #[test]
    fn test_path_relative_to_root() {
        let node = Node::from(FileNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice/docs/a.txt",
        )));
        assert_eq!(node.path(), "/docs/a.txt");
        assert_eq!(node.basename(), "a.txt");
        assert_eq!(node.dirname(), "/docs");
        assert_eq!(node.extension(), Some("txt"));
    }

    #[test]
    fn test_path_of_root_folder() {
        let node = Node::from(FolderNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice",
        )));
        assert_eq!(node.path(), "/");
        assert_eq!(node.dirname(), "/");
    }

    #[test]
    fn test_path_requires_whole_segment_match() {
        let node = Node::from(FileNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alicex/files/alice/x.txt",
        )));
        assert_eq!(node.path(), "/x.txt");
    }

    #[test]
    fn test_path_without_root_falls_back_to_source() {
        let source = "https://cloud.example.com/remote.php/dav/files/bob/x.txt";
        let node = Node::from(FileNode::new(create_test_data(source)));
        assert_eq!(node.path(), source);
    }

    #[test]
    fn test_has_preview() {
        let node = Node::from(FileNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice/a.png",
        )));
        assert!(node.has_preview());

        let mut data = create_test_data("https://cloud.example.com/remote.php/dav/files/alice/b");
        data.attributes.clear();
        assert!(!Node::from(FolderNode::new(data)).has_preview());
    }

    #[test]
    fn test_serialized_shape() {
        let node = Node::from(FileNode::new(create_test_data(
            "https://cloud.example.com/remote.php/dav/files/alice/docs/a.txt",
        )));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "file");
        assert_eq!(value["id"], 42);
        assert_eq!(value["root"], "/files/alice");
        assert_eq!(value["owner"], "alice");
        assert_eq!(value["permissions"], 27);
        assert_eq!(value["mtime"], "2023-11-14T22:13:20Z");
        assert_eq!(value["attributes"]["has-preview"], true);

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }
}
