//! File-info record contract tests
//!
//! These tests pin the key names of the server's file-info record.

#[allow(dead_code)]
const FILE_INFO_KEYS: &[&str] = &[
    "fileid",
    "path",
    "topLevelFolder",
    "relativePath",
    "basename",
    "lastmod",
    "mime",
    "size",
    "type",
    "hasPreview",
    "permissions",
    "mount-type",
    "etag",
];
