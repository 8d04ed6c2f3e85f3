//! # Core Types
//!
//! This crate defines the primitive types shared by the file-listing crates.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Identifiers and bitmasks are typed and cannot be confused.
//! - **Wire-faithful**: Every type round-trips the server's JSON representation unchanged.
//!
//! ## Key Types
//!
//! - [`FileId`]: Server-side file index identifier
//! - [`Permission`]: Permission bitmask attached to every entry
//! - [`EntryType`]: Tag distinguishing files from folders

pub mod entry_type;
pub mod ids;
pub mod permission;

pub use entry_type::EntryType;
pub use ids::FileId;
pub use permission::Permission;
