//! Path helpers
//!
//! This module handles joining and splitting slash-separated paths. It does
//! not interpret `.` or `..`; those are ordinary segments here.

/// Joins path segments with `/`, collapsing runs of separators
///
/// Empty segments are skipped. A leading separator on the first segment and a
/// trailing separator on the last one are kept. Joining nothing yields `"."`.
///
/// # Examples
///
/// ```
/// use fs_view::join_path;
///
/// assert_eq!(join_path(&["dav/files", "alice", "docs/a.txt"]), "dav/files/alice/docs/a.txt");
/// assert_eq!(join_path(&["dav/files/", "/alice", ""]), "dav/files/alice");
/// assert_eq!(join_path(&["/", "a//b/"]), "/a/b/");
/// ```
pub fn join_path(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        return ".".to_string();
    }

    let mut out = String::with_capacity(joined.len());
    let mut previous_was_separator = false;
    for ch in joined.chars() {
        if ch == '/' {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        out.push(ch);
    }
    out
}

/// Returns the final segment of `path`, ignoring trailing separators
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Returns everything before the final segment of `path`
///
/// The parent of a top-level entry is `/` for absolute paths and `.` for
/// relative ones.
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." };
    }
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => trimmed[..idx].trim_end_matches('/'),
        None => ".",
    }
}

/// Returns the extension of the final segment, without the dot
///
/// Hidden files such as `.profile` have no extension.
pub fn extension(path: &str) -> Option<&str> {
    let name = basename(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) if idx + 1 == name.len() => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}
