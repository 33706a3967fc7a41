//! Scanner and toolkit behavior against real directory trees.

use std::path::{Path, PathBuf};

use nuv::{Error, ServiceContext, Toolkit};
use walkdir::WalkDir;

/// Pre-order, name-sorted list of directories, computed independently.
fn reference_walk(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(Result::unwrap)
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn build(root: &Path, dirs: &[&str], files: &[&str]) {
    for dir in dirs {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in files {
        std::fs::write(root.join(file), file.as_bytes()).unwrap();
    }
}

#[test]
fn scan_matches_reference_walk() {
    let trees: [(&[&str], &[&str]); 4] = [
        (&[], &[]),
        (&["only"], &["only/file.txt"]),
        (&["a/b/c", "a/d", "e", "Z", "_x"], &["a/b/1.txt", "e/2.txt", "top.txt"]),
        (&["m/n/o/p", "m/n2", "m2", "m10", "m1/x.d"], &["m1/x.d/file"]),
    ];
    let ctx = ServiceContext::live();
    let nuv = Toolkit::new(&ctx);

    for (dirs, files) in trees {
        let tmp = tempfile::tempdir().unwrap();
        build(tmp.path(), dirs, files);

        let expected: String =
            reference_walk(tmp.path()).iter().map(|p| format!("{}|", p.display())).collect();
        let actual = nuv.scan(tmp.path(), |p| format!("{}|", p.display())).unwrap();
        assert_eq!(actual, expected, "tree {dirs:?}");
    }
}

#[test]
fn root_with_single_file_yields_root_only() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("testdata");
    build(&root, &[""], &["sample.txt"]);
    let ctx = ServiceContext::live();

    let out = Toolkit::new(&ctx).scan(&root, |d| format!("{} ", d.display())).unwrap();
    assert_eq!(out, format!("{} ", root.display()));
}

#[test]
fn checked_in_testdata_scans_as_expected() {
    let ctx = ServiceContext::live();
    let out = Toolkit::new(&ctx).scan("testdata", |d| format!("{} ", d.display())).unwrap();
    assert_eq!(out, "testdata testdata/subfolder ");
}

#[test]
fn read_dir_returns_every_child() {
    let tmp = tempfile::tempdir().unwrap();
    build(tmp.path(), &["d1", "d2"], &["f1", "f2", "f3"]);
    let ctx = ServiceContext::live();

    let names = Toolkit::new(&ctx).read_dir(tmp.path()).unwrap();
    assert_eq!(names.len(), 5);
    for name in &names {
        assert!(tmp.path().join(name).exists(), "{name} is not a child");
    }
}

#[test]
fn missing_file_is_not_found() {
    let ctx = ServiceContext::live();
    let err = Toolkit::new(&ctx).read_file("testdata/missing.txt").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn failed_scan_returns_no_partial_output() {
    let ctx = ServiceContext::live();
    let mut calls = 0;
    let result = Toolkit::new(&ctx).scan("testdata/missing", |_| {
        calls += 1;
        String::new()
    });
    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert_eq!(calls, 0);
}
