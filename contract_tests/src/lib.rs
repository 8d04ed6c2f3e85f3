//! # Wire Contract Tests
//!
//! This crate provides "golden" tests for the JSON shapes exchanged with the
//! server and handed to display code, so they don't drift accidentally.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Key names are written out literally
//! - **Testability first**: Contract tests fail when a field is renamed or dropped
//!
//! ## Structure
//!
//! - `file_info`: the record the server sends
//! - `node`: the node the mapper produces

pub mod file_info;
pub mod node;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde_json::Value;

    /// Sample server record for `alice`, matching the documented example
    pub fn sample_file_info() -> Value {
        serde_json::json!({
            "fileid": 42,
            "path": "/alice/files/docs/a.txt",
            "topLevelFolder": "/alice/files",
            "relativePath": "docs/a.txt",
            "basename": "a.txt",
            "lastmod": 1700000000,
            "mime": "text/plain",
            "size": 10,
            "type": "file",
            "hasPreview": false,
            "permissions": 27,
            "mount-type": "local",
            "etag": "abc"
        })
    }

    /// Verifies a JSON object has exactly the expected keys
    pub fn verify_exact_keys(value: &Value, expected: &[&str]) {
        let object = value
            .as_object()
            .unwrap_or_else(|| panic!("expected a JSON object, got {}", value));

        let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
        actual.sort_unstable();
        let mut expected = expected.to_vec();
        expected.sort_unstable();

        assert_eq!(
            actual, expected,
            "Key set changed: expected {:?}, got {:?}",
            expected, actual
        );
    }
}
