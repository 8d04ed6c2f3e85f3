//! Node contract tests
//!
//! These tests pin the serialized node shape consumed by display code.

#[allow(dead_code)]
const NODE_KEYS: &[&str] = &[
    "type",
    "id",
    "source",
    "root",
    "mime",
    "mtime",
    "owner",
    "size",
    "permissions",
    "attributes",
];
