//! # Filesystem View
//!
//! This crate provides the client-side view of file-listing entries.
//!
//! ## Philosophy
//!
//! - **Paths are views, not authority**: A node describes where an entry lives;
//!   it grants nothing
//! - **Remote first**: Every node points at its remote resource through a fully
//!   qualified `source` URL
//! - **Display-ready**: Nodes carry everything a listing needs without further
//!   lookups
//!
//! ## Design
//!
//! - A [`Node`] is either a [`FileNode`] or a [`FolderNode`]; both wrap the same
//!   [`NodeData`]
//! - The display path of a node is derived from `source` relative to `root`
//! - Path helpers are plain string functions with POSIX separator rules

pub mod node;
pub mod path;

pub use node::{Attributes, FileNode, FolderNode, Node, NodeData, NodeKind, HAS_PREVIEW_ATTRIBUTE};
pub use path::{basename, dirname, extension, join_path};
