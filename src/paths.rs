//! Pure path-string helpers.
//!
//! These operate on `/`-separated strings and never touch the disk.

const SEP: char = '/';

/// Returns the last element of `path`.
///
/// Trailing separators are ignored. An empty path yields `"."` and a path
/// made only of separators yields `"/"`.
#[must_use]
pub fn base_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches(SEP);
    if trimmed.is_empty() {
        return SEP.to_string();
    }
    match trimmed.rfind(SEP) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Returns the extension of the final element, including the leading dot.
///
/// `"archive.tar.gz"` yields `".gz"`, `".bashrc"` yields `".bashrc"` and a
/// name without a dot yields `""`.
#[must_use]
pub fn file_ext(path: &str) -> String {
    let name = path.rsplit(SEP).next().unwrap_or(path);
    name.rfind('.').map_or_else(String::new, |idx| name[idx..].to_string())
}

/// Joins two path fragments and cleans the result lexically.
///
/// Empty fragments are dropped and joining two empty fragments yields `""`.
/// Otherwise the joined path goes through [`clean_path`], so
/// `join_path("a", "../b")` is `"b"` and `join_path("a/", "")` is `"a"`.
#[must_use]
pub fn join_path(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean_path(right),
        (false, true) => clean_path(left),
        (false, false) => clean_path(&format!("{left}{SEP}{right}")),
    }
}

/// Returns the shortest lexically equivalent path.
///
/// Repeated separators and `.` elements are removed and `..` cancels the
/// element before it. A rooted path never climbs above `/`; a relative one
/// keeps leading `..` elements. An empty result is `"."`. Symlinks are not
/// consulted.
#[must_use]
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with(SEP);
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(SEP) {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let body = parts.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("{SEP}{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
