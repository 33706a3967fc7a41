//! Depth-first folder scanner.
//!
//! [`scan`] visits the root folder and every nested folder in pre-order,
//! calls a visitor once per folder, and concatenates what the visitor
//! returns. Files are skipped and symlinks are never followed, so the walk
//! always terminates. Siblings are visited in lexicographic order, which
//! makes the output a pure function of the tree and the visitor.
//!
//! Any failure below the root (an unreadable or vanished directory) aborts
//! the whole scan; a partial result is never returned.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::filesystem::{EntryKind, FileSystem};

/// Scans the tree rooted at `root`, returning the concatenated visitor output.
///
/// The root is passed to the visitor exactly as given; nested folders are
/// passed as `parent.join(name)`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `root` does not exist,
/// [`Error::PermissionDenied`] if it cannot be inspected,
/// [`Error::NotADirectory`] if it is not a directory, and the first error
/// hit while listing or classifying anything below it.
pub fn scan<F>(fs: &dyn FileSystem, root: &Path, mut visit: F) -> Result<String>
where
    F: FnMut(&Path) -> String,
{
    // The root may be a symlink to a directory; nothing below it may.
    if fs.metadata(root)? != EntryKind::Directory {
        return Err(Error::NotADirectory { path: root.to_path_buf() });
    }

    let mut output = String::new();
    let mut visited = 0usize;
    walk(fs, root, &mut visit, &mut output, &mut visited).inspect_err(|err| {
        warn!(root = %root.display(), error = %err, "scan aborted");
    })?;
    debug!(root = %root.display(), folders = visited, "scan complete");
    Ok(output)
}

fn walk<F>(
    fs: &dyn FileSystem,
    dir: &Path,
    visit: &mut F,
    output: &mut String,
    visited: &mut usize,
) -> Result<()>
where
    F: FnMut(&Path) -> String,
{
    output.push_str(&visit(dir));
    *visited += 1;

    let mut names = fs.list_dir(dir)?;
    // Adapters sort already; a replayed or foreign listing might not be.
    names.sort_unstable();

    let mut children: Vec<PathBuf> = Vec::new();
    for name in names {
        let child = dir.join(&name);
        if fs.entry_kind(&child)? == EntryKind::Directory {
            children.push(child);
        }
    }
    for child in children {
        walk(fs, &child, visit, output, visited)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::adapters::replaying::ReplayingFileSystem;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use crate::error::ErrorKind;
    use chrono::Utc;
    use serde_json::json;

    fn tree(dirs: &[&str], files: &[&str]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        for dir in dirs {
            std::fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        for file in files {
            std::fs::write(root.path().join(file), "x").unwrap();
        }
        root
    }

    fn relative_visits(root: &Path) -> Vec<String> {
        let out = scan(&LiveFileSystem, root, |p| {
            let rel = p.strip_prefix(root).unwrap().display().to_string();
            format!("[{rel}]")
        })
        .unwrap();
        out.trim_start_matches('[')
            .trim_end_matches(']')
            .split("][")
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn root_with_only_files_visits_root_once() {
        let root = tree(&[], &["sample.txt"]);
        let out = scan(&LiveFileSystem, root.path(), |p| format!("{} ", p.display())).unwrap();
        assert_eq!(out, format!("{} ", root.path().display()));
    }

    #[test]
    fn visits_in_sorted_pre_order() {
        let root = tree(&["b/z", "b/a", "a", "c/d/e"], &["b/file.txt", "a.txt"]);
        assert_eq!(
            relative_visits(root.path()),
            vec!["", "a", "b", "b/a", "b/z", "c", "c/d", "c/d/e"]
        );
    }

    #[test]
    fn visitor_runs_once_per_folder() {
        let root = tree(&["one", "two/three"], &[]);
        let mut calls = 0;
        scan(&LiveFileSystem, root.path(), |_| {
            calls += 1;
            String::new()
        })
        .unwrap();
        assert_eq!(calls, 4);
    }

    #[test]
    fn missing_root_is_not_found() {
        let root = tree(&[], &[]);
        let err = scan(&LiveFileSystem, &root.path().join("missing"), |_| String::new());
        assert!(matches!(err, Err(Error::NotFound { .. })));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let root = tree(&[], &["sample.txt"]);
        let err = scan(&LiveFileSystem, &root.path().join("sample.txt"), |_| String::new());
        assert!(matches!(err, Err(Error::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let root = tree(&["real"], &[]);
        std::os::unix::fs::symlink(root.path(), root.path().join("real/loop")).unwrap();
        assert_eq!(relative_visits(root.path()), vec!["", "real"]);
    }

    fn replayed_fs(calls: Vec<(&str, serde_json::Value)>) -> ReplayingFileSystem {
        let interactions = calls
            .into_iter()
            .zip(0..)
            .map(|((method, output), seq)| Interaction {
                seq,
                port: "fs".into(),
                method: method.into(),
                input: json!({}),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "scan".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        ReplayingFileSystem::new(CassetteReplayer::new(&cassette))
    }

    fn denied(path: &str) -> serde_json::Value {
        let message = format!("permission denied: {path}");
        json!({"err": {"kind": "permission_denied", "message": message}})
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_root_is_scanned() {
        let root = tree(&["real/sub"], &[]);
        let link = root.path().join("link");
        std::os::unix::fs::symlink(root.path().join("real"), &link).unwrap();

        let out = scan(&LiveFileSystem, &link, |p| format!("{} ", p.display())).unwrap();
        assert_eq!(out, format!("{} {} ", link.display(), link.join("sub").display()));
    }

    #[test]
    fn uninspectable_root_is_permission_denied() {
        let fs = replayed_fs(vec![("metadata", denied("locked/root"))]);
        let mut calls = 0;
        let err = scan(&fs, Path::new("locked/root"), |_| {
            calls += 1;
            String::new()
        })
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "permission denied: locked/root");
        assert_eq!(calls, 0);
    }

    #[test]
    fn unreadable_subdirectory_aborts_scan() {
        let fs = replayed_fs(vec![
            ("metadata", json!({"ok": "directory"})),
            ("list_dir", json!({"ok": ["locked", "open"]})),
            ("entry_kind", json!({"ok": "directory"})),
            ("entry_kind", json!({"ok": "directory"})),
            ("list_dir", denied("root/locked")),
        ]);

        let mut seen = Vec::new();
        let err = scan(&fs, Path::new("root"), |p| {
            seen.push(p.display().to_string());
            format!("{} ", p.display())
        })
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(seen, vec!["root", "root/locked"]);
    }
}
