use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to write a Markdown document into a temp dir
fn write_doc(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_no_arguments_prints_usage() {
    cargo::cargo_bin_cmd!("mdview")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: mdview"));
}

#[test]
fn test_missing_file() {
    cargo::cargo_bin_cmd!("mdview")
        .arg("/nonexistent/README.md")
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "File /nonexistent/README.md not found.",
        ));
}

#[test]
fn test_view_local_file() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(
        &temp_dir,
        "doc.md",
        "# Title\n\n- item one\n* item two\n\n1. first\n2. second\n",
    );

    cargo::cargo_bin_cmd!("mdview")
        .arg(&doc)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1mTitle\x1b[0m"))
        .stdout(predicate::str::contains("- item one\n- item two"))
        .stdout(predicate::str::contains("1. first\n1. second"));
}

#[test]
fn test_word_limit() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "doc.md", "one two three four five\nsix seven\n");

    cargo::cargo_bin_cmd!("mdview")
        .args([doc.as_str(), "3"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("one two three\n");
}

#[test]
fn test_html_with_word_limit() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "doc.md", "- alpha beta\n- gamma\n");

    cargo::cargo_bin_cmd!("mdview")
        .args([doc.as_str(), "--html", "2"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout("<ul> <li>alpha\n");
}

#[test]
fn test_html_alone_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "doc.md", "plain words\n");

    cargo::cargo_bin_cmd!("mdview")
        .args([doc.as_str(), "--html"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>").not())
        .stdout(predicate::str::contains("plain words"));
}

#[test]
fn test_unknown_fence_language_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(
        &temp_dir,
        "doc.md",
        "Intro\n\n```xyzzy123\nraw body\n```\n",
    );

    cargo::cargo_bin_cmd!("mdview")
        .arg(&doc)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("raw body"))
        .stdout(predicate::str::contains("```").not());
}

#[test]
fn test_config_file_changes_styles() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "doc.md", "# Title\n");
    let config = write_doc(
        &temp_dir,
        "mdview.toml",
        "[styles]\nheading = \"underline\"\n",
    );

    cargo::cargo_bin_cmd!("mdview")
        .args(["--config", config.as_str(), doc.as_str()])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[4mTitle\x1b[0m"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "doc.md", "# Title\n");
    let config = write_doc(
        &temp_dir,
        "mdview.toml",
        "[styles]\nheading = \"sparkle\"\n",
    );

    cargo::cargo_bin_cmd!("mdview")
        .args(["--config", config.as_str(), doc.as_str()])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML parsing error"));
}

#[test]
fn test_remote_fetch_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_doc(
        &temp_dir,
        "mdview.toml",
        "[source]\nremote_prefixes = [\"http://127.0.0.1:1/\"]\ntimeout_secs = 5\n",
    );

    cargo::cargo_bin_cmd!("mdview")
        .args(["--config", config.as_str(), "http://127.0.0.1:1/README.md"])
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error fetching file"));
}
