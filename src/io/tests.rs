#![cfg(test)]

use std::fs;
use std::path::{Component, PathBuf};

use tempfile::TempDir;

use super::path_filtering::{by_name, by_path, by_regex, by_type, directories, files, PathKind};
use super::path_ordering::{by_path_lexicographically, by_path_numerically, by_size};
use super::*;
use crate::filtering::Predicate;
use crate::ordering::{ascending, descending, sort, Comparator};
use crate::seq::iterable;

fn upper_casing(line: String) -> String {
    line.to_uppercase()
}

fn reversing(line: String) -> String {
    line.chars().rev().collect()
}

/// root/{a.txt, b10.txt, b2.txt, nested/{inner.txt}}
fn tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("a.txt"), "a").unwrap();
    fs::write(root.path().join("b10.txt"), "b10b10").unwrap();
    fs::write(root.path().join("b2.txt"), "b2b").unwrap();
    fs::create_dir(root.path().join("nested")).unwrap();
    fs::write(root.path().join("nested").join("inner.txt"), "").unwrap();
    root
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_slurp() {
    assert_eq!(slurp("".as_bytes()).unwrap(), "");
    assert_eq!(slurp("Line 0\n".as_bytes()).unwrap(), "Line 0");
    assert_eq!(slurp("Line 0\r".as_bytes()).unwrap(), "Line 0");
    assert_eq!(slurp("Line 0\r\n".as_bytes()).unwrap(), "Line 0");
    assert_eq!(slurp("Line 0\nLine 1".as_bytes()).unwrap(), "Line 0\nLine 1");
    assert_eq!(slurp("Line 0\rLine 1".as_bytes()).unwrap(), "Line 0\nLine 1");
    assert_eq!(
        slurp("Line 0\r\nLine 1".as_bytes()).unwrap(),
        "Line 0\nLine 1",
        "Every kind of terminator should become a newline."
    );
}

#[test]
fn test_slurp_ignoring_blank_lines() {
    let blank = ignoring_blank_lines();
    for (input, expected) in [
        ("", ""),
        ("\n", ""),
        ("\r", ""),
        ("\r\n", ""),
        ("Line 0\n", "Line 0"),
        ("Line 0\n\n", "Line 0"),
        ("Line 0\n\nLine 1\n\n", "Line 0\nLine 1"),
        ("Line 0\n   \nLine 1", "Line 0\nLine 1"),
    ] {
        assert_eq!(slurp_with(input.as_bytes(), &[&blank]).unwrap(), expected, "Input: {input:?}");
    }
}

#[test]
fn test_slurp_ignoring_line_segments() {
    let comments = ignoring_line_segments_that_start_with("#");
    for (input, expected) in [
        ("", ""),
        ("Line 0\n", "Line 0"),
        ("Line 0\r", "Line 0"),
        ("Line 0\r\n", "Line 0"),
        ("#Line 0", ""),
        ("Line# 0", "Line"),
        ("Line 0#", "Line 0"),
        ("#Line 0\nLine 1", "Line 1"),
        ("Line 0\n#Line 1", "Line 0"),
        ("Line# 0\nLine# 1", "Line\nLine"),
    ] {
        assert_eq!(slurp_with(input.as_bytes(), &[&comments]).unwrap(), expected, "Input: {input:?}");
    }
}

#[test]
fn test_slurp_with_steps() {
    assert_eq!(slurp_with("".as_bytes(), &[&upper_casing, &reversing]).unwrap(), "");
    assert_eq!(slurp_with("repaid".as_bytes(), &[&upper_casing, &reversing]).unwrap(), "DIAPER");
    assert_eq!(slurp_with("repaid".as_bytes(), &[&reversing, &upper_casing]).unwrap(), "DIAPER");
}

#[test]
fn test_filename_extension() {
    assert_eq!(filename_extension(""), "");
    assert_eq!(filename_extension("    "), "");
    assert_eq!(filename_extension("foo"), "");
    assert_eq!(filename_extension("foo."), "");
    assert_eq!(filename_extension("foo.ext"), "ext");
    assert_eq!(filename_extension("path/to/foo.ext"), "ext");
    assert_eq!(filename_extension("path/to/foo.bar.ext"), "ext");
    assert_eq!(filename_extension("path.d/foo"), "", "Only the last component should count.");
}

#[test]
fn test_filename_without_extension() {
    assert_eq!(filename_without_extension(""), "");
    assert_eq!(filename_without_extension("    "), "    ");
    assert_eq!(filename_without_extension("foo"), "foo");
    assert_eq!(filename_without_extension("foo."), "foo");
    assert_eq!(filename_without_extension("foo.ext"), "foo");
    assert_eq!(filename_without_extension("path/to/foo.ext"), "foo");
    assert_eq!(filename_without_extension("path/to/foo.bar.ext"), "foo.bar");
}

#[test]
fn test_spit() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("out.txt");

    spit_path(&path, "first", SpitOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "first");

    spit_path(&path, "second", SpitOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second", "The file should be truncated.");

    let append = SpitOptions::parse(&[&"append?", &true]).unwrap();
    spit_path(&path, "+", append).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second+");

    spit_lines(&path, iterable(["a", "b"]), SpitOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    assert_eq!(slurp_path(&path).unwrap(), "a\nb");

    let buffer = spit(Vec::new(), "bytes", SpitOptions::default()).unwrap();
    assert_eq!(buffer, b"bytes");
}

#[test]
fn test_spit_options() {
    assert_eq!(SpitOptions::parse(&[]).unwrap(), SpitOptions::default());
    assert_eq!(
        SpitOptions::parse(&[&"flush?", &false]).unwrap(),
        SpitOptions {
            append: false,
            flush: false
        }
    );
    assert!(SpitOptions::parse(&[&"append?"]).is_err(), "A dangling key should be rejected.");
    assert!(SpitOptions::parse(&[&"append?", &1]).is_err(), "A non-bool flag should be rejected.");
}

#[test]
fn test_delete() {
    let root = tree();
    let file = root.path().join("a.txt");
    let nested = root.path().join("nested");

    assert!(matches!(delete_file(&nested), Err(IoError::NotRegularFile(_))));
    assert!(matches!(delete_directory(&file), Err(IoError::NotDirectory(_))));

    delete_file(&file).unwrap();
    assert!(!file.exists());
    delete_directory(&nested).unwrap();
    assert!(!nested.exists(), "The directory should be gone along with its contents.");
    assert!(matches!(delete_file(&file), Err(IoError::NotRegularFile(_))));
}

#[test]
fn test_path_kind() {
    let root = tree();
    assert_eq!(PathKind::of(&root.path().join("a.txt")), PathKind::File);
    assert_eq!(PathKind::of(&root.path().join("nested")), PathKind::Directory);
    assert_eq!(PathKind::of(&root.path().join("missing")), PathKind::Unknown);
    assert_eq!("F".parse::<PathKind>().unwrap(), PathKind::File);
    assert_eq!("directory".parse::<PathKind>().unwrap(), PathKind::Directory);
    assert!("unknown".parse::<PathKind>().is_err());
    assert!(by_type("link").is_err());
}

#[test]
fn test_find_paths() {
    let root = tree();

    let all = find_paths(root.path(), |_: &PathBuf| true, ascending()).unwrap();
    assert_eq!(names(&all), ["a.txt", "b10.txt", "b2.txt", "nested"]);
    assert!(all.iter().all(|path| path.is_absolute()));

    let only_files = find_paths(root.path(), files(), ascending()).unwrap();
    assert_eq!(names(&only_files), ["a.txt", "b10.txt", "b2.txt"]);

    let only_directories = find_paths(root.path(), directories(), ascending()).unwrap();
    assert_eq!(names(&only_directories), ["nested"]);

    let recursive = find_paths_recursively(root.path(), by_type("f").unwrap(), ascending()).unwrap();
    assert_eq!(names(&recursive), ["a.txt", "b10.txt", "b2.txt", "inner.txt"]);

    let numeric = find_paths(root.path(), by_name("b*").unwrap(), by_path_numerically()).unwrap();
    assert_eq!(names(&numeric), ["b2.txt", "b10.txt"], "Numbers should sort by value.");

    let reversed = find_paths(root.path(), files(), descending()).unwrap();
    assert_eq!(names(&reversed), ["b2.txt", "b10.txt", "a.txt"]);

    let by_bytes = find_paths(root.path(), files(), by_size()).unwrap();
    assert_eq!(names(&by_bytes), ["a.txt", "b2.txt", "b10.txt"]);

    assert!(find_paths(root.path().join("missing"), files(), ascending()).is_err());
}

#[test]
fn test_find_paths_normalizes() {
    let root = tree();
    let dotted = root.path().join("nested").join("..").join(".");

    let found = find_paths(&dotted, files(), ascending()).unwrap();
    assert_eq!(names(&found), ["a.txt", "b10.txt", "b2.txt"]);
    assert!(
        found
            .iter()
            .all(|path| !path.components().any(|c| matches!(c, Component::ParentDir | Component::CurDir))),
        "Found paths should carry no `.` or `..` components."
    );
    assert_eq!(found[0], std::path::absolute(root.path().join("a.txt")).unwrap());

    let recursive = find_paths_recursively(&dotted, by_name("inner.txt").unwrap(), ascending()).unwrap();
    assert_eq!(recursive, [std::path::absolute(root.path().join("nested").join("inner.txt")).unwrap()]);
}

#[test]
fn test_path_predicates() {
    let mut name = by_name("*.txt").unwrap();
    assert!(name.test(&PathBuf::from("/tmp/a.txt")));
    assert!(!name.test(&PathBuf::from("/tmp/a.txt/b")));

    let mut path = by_path("/tmp/*/a.txt").unwrap();
    assert!(path.test(&PathBuf::from("/tmp/x/a.txt")));
    assert!(!path.test(&PathBuf::from("/var/x/a.txt")));

    let mut regex = by_regex(r".*/b\d+\.txt").unwrap();
    assert!(regex.test(&PathBuf::from("/tmp/b10.txt")));
    assert!(!regex.test(&PathBuf::from("/tmp/b10.txt.bak")), "The whole path should have to match.");

    assert!(by_name("[").is_err());
    assert!(by_regex("(").is_err());
}

#[test]
fn test_path_ordering() {
    let paths = || iterable(["b/10", "b/9", "a/2/x", "a/10", "a"].map(PathBuf::from));
    let as_strings = |paths: Vec<PathBuf>| {
        paths
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        as_strings(sort(by_path_numerically(), paths())),
        ["a", "a/2/x", "a/10", "b/9", "b/10"]
    );
    assert_eq!(
        as_strings(sort(by_path_lexicographically(), paths())),
        ["a", "a/10", "a/2/x", "b/10", "b/9"]
    );
    assert!(
        by_path_numerically()
            .compare(&PathBuf::from("f007"), &PathBuf::from("f7"))
            .is_eq(),
        "Leading zeros should not matter."
    );
}

#[test]
fn test_format_tree() {
    let root = tree();
    let name = root.path().file_name().unwrap().to_string_lossy().into_owned();
    let expected = format!(
        "{name}\n    a.txt\n    b10.txt\n    b2.txt\n   nested\n        inner.txt\n"
    );
    assert_eq!(format_tree(root.path()).unwrap(), expected);
}
