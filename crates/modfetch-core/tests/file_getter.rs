//! Integration tests for the local filesystem backend.

#![cfg(unix)]

use std::path::Path;

use modfetch_core::GetError;
use modfetch_core::fetch::get;
use tempfile::TempDir;

fn write_module(dir: &Path) {
    std::fs::create_dir_all(dir).expect("create_dir_all should succeed");
    std::fs::write(dir.join("main.tf"), "module content").expect("write should succeed");
}

#[test]
fn fetch_links_destination_to_source() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let src = temp.path().join("modules").join("vpc");
    let dst = temp.path().join("dst");
    write_module(&src);

    get(&dst, &format!("file::{}", src.display())).expect("fetch should succeed");

    let metadata = std::fs::symlink_metadata(&dst).expect("destination should exist");
    assert!(metadata.file_type().is_symlink());
    let content = std::fs::read_to_string(dst.join("main.tf")).expect("read should succeed");
    assert_eq!(content, "module content");
}

#[test]
fn fetch_accepts_file_url_form() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let src = temp.path().join("vpc");
    let dst = temp.path().join("dst");
    write_module(&src);

    get(&dst, &format!("file://{}", src.display())).expect("fetch should succeed");

    assert!(dst.join("main.tf").exists());
}

#[test]
fn fetch_is_idempotent() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let src = temp.path().join("vpc");
    let dst = temp.path().join("dst");
    write_module(&src);

    let source = format!("file::{}", src.display());
    get(&dst, &source).expect("first fetch should succeed");
    get(&dst, &source).expect("second fetch should succeed");

    let metadata = std::fs::symlink_metadata(&dst).expect("destination should exist");
    assert!(metadata.file_type().is_symlink());
    let target = std::fs::read_link(&dst).expect("read_link should succeed");
    assert_eq!(target, src);
}

#[test]
fn fetch_rejects_populated_non_symlink_destination() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let src = temp.path().join("vpc");
    let dst = temp.path().join("dst");
    write_module(&src);
    write_module(&dst);

    let err = get(&dst, &format!("file::{}", src.display())).expect_err("fetch should fail");

    assert!(matches!(err, GetError::Download { .. }));
    let message = err.to_string();
    assert!(message.contains("error downloading module"));
    assert!(message.contains("not a symlink"));
    assert!(dst.join("main.tf").exists(), "destination content must survive");
}

#[test]
fn fetch_rejects_missing_source() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let dst = temp.path().join("dst");
    let missing = temp.path().join("no-such-module");

    let err = get(&dst, &format!("file::{}", missing.display())).expect_err("fetch should fail");

    assert!(err.to_string().contains("does not exist"));
    assert!(!dst.exists(), "failed fetch must not create the destination");
}

#[test]
fn fetch_rejects_file_source() {
    let temp = TempDir::new().expect("tempdir should succeed");
    let src = temp.path().join("plain.txt");
    let dst = temp.path().join("dst");
    std::fs::write(&src, "not a directory").expect("write should succeed");

    let err = get(&dst, &format!("file::{}", src.display())).expect_err("fetch should fail");

    assert!(err.to_string().contains("not a directory"));
}
