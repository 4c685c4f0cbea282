//! End-to-end tests for the `marksite` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn generates_pages_and_copies_assets() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("content/blog")).unwrap();
    fs::create_dir(root.join("static")).unwrap();
    fs::write(
        root.join("content/index.md"),
        "# Home\n\nWelcome **here**.",
    )
    .unwrap();
    fs::write(root.join("content/blog/post.md"), "# Post\n\n* a\n* b").unwrap();
    fs::write(root.join("static/style.css"), "body {}").unwrap();
    fs::write(
        root.join("template.html"),
        "<title>{{ Title }}</title><main>{{ Content }}</main>",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("marksite").unwrap();
    cmd.current_dir(root).assert().success();

    let index = fs::read_to_string(root.join("public/index.html")).unwrap();
    assert!(index.contains("<title>Home</title>"));
    assert!(index.contains("<b>here</b>"));

    let post = fs::read_to_string(root.join("public/blog/post.html")).unwrap();
    assert!(post.contains("<ul><li>a</li><li>b</li></ul>"));

    assert!(root.join("public/style.css").exists());
}

#[test]
fn rerun_replaces_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("content")).unwrap();
    fs::create_dir(root.join("static")).unwrap();
    fs::create_dir(root.join("public")).unwrap();
    fs::write(root.join("content/page.md"), "# P\n\nbody").unwrap();
    fs::write(root.join("template.html"), "{{ Content }}").unwrap();
    fs::write(root.join("public/stale.html"), "old").unwrap();

    let mut cmd = Command::cargo_bin("marksite").unwrap();
    cmd.current_dir(root).assert().success();

    assert!(!root.join("public/stale.html").exists());
    assert!(root.join("public/page.html").exists());
}

#[test]
fn fails_without_content_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("static")).unwrap();
    fs::write(root.join("template.html"), "{{ Content }}").unwrap();

    let mut cmd = Command::cargo_bin("marksite").unwrap();
    cmd.current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("content"));
}

#[test]
fn page_without_level_one_heading_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("content")).unwrap();
    fs::create_dir(root.join("static")).unwrap();
    fs::write(root.join("content/bare.md"), "## only a subheading").unwrap();
    fs::write(root.join("template.html"), "{{ Content }}").unwrap();

    let mut cmd = Command::cargo_bin("marksite").unwrap();
    cmd.current_dir(root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no level-1 heading"));
}
