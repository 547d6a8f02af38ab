#![cfg(test)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use super::*;
use crate::seq::Cursor;

/// Interrupts `watch` after a while, so that a missed event fails the test instead of hanging it.
fn deadline(interrupter: Interrupter) {
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(5));
        interrupter.interrupt();
    });
}

#[test]
fn test_parse_kinds() {
    assert_eq!(
        parse_kinds(&["create", "DELETE", "Modify"]).unwrap(),
        WatchEventKind::ALL,
        "Names should be case insensitive."
    );
    assert!(parse_kinds::<&str>(&[]).unwrap().is_empty());
    assert!(parse_kinds(&["invalidate"]).is_err(), "Invalidation can't be requested.");
    assert_eq!(
        parse_kinds(&["create", "rename"]).unwrap_err(),
        InvalidEventTypeError {
            name: "rename".to_owned()
        }
    );
    assert_eq!(WatchEventKind::Invalidate.to_string(), "invalidate");
}

#[test]
fn test_missing_directory() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("missing");
    assert!(watch_directories(&[], [missing]).is_err());
}

#[test]
fn test_interrupt() {
    let root = tempfile::tempdir().unwrap();
    let mut watch = watch_directories(&[], [root.path()]).unwrap();
    assert_eq!(watch.directories().len(), 1);
    assert!(!watch.is_interrupted());

    watch.interrupter().interrupt();
    assert!(!watch.has_more(), "An interrupted watch should end instead of blocking.");
    assert!(watch.is_interrupted());
    assert_eq!(watch.take_next(), Err(crate::seq::ExhaustedError));
    watch.interrupter().interrupt();
    assert!(!watch.has_more());
}

#[test]
fn test_create_event() {
    let root = tempfile::tempdir().unwrap();
    let directory = root.path().canonicalize().unwrap();
    let mut watch = watch_directories(&[WatchEventKind::Create], [root.path()]).unwrap();
    deadline(watch.interrupter());

    let target = directory.join("new.txt");
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        std::fs::write(target, "contents").unwrap();
    });

    let event = watch.take_next().expect("The watch should report the new file.");
    assert_eq!(event.kind, WatchEventKind::Create);
    assert_eq!(event.origin(), (directory.as_path(), PathBuf::from("new.txt").as_path()));
    assert!(!watch.is_interrupted());
}

#[test]
fn test_watch_with_callback() {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join("seen.txt");
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        std::fs::write(target, "").unwrap();
    });

    let mut seen = Vec::new();
    watch_directories_with(&[WatchEventKind::Create], [root.path()], |event, interrupter| {
        seen.push(event.path);
        interrupter.interrupt();
    })
    .unwrap();
    assert_eq!(seen, [PathBuf::from("seen.txt")], "The callback should stop after the first event.");
}
