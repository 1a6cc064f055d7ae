//! CLI contract tests
//!
//! Runs the real binary against files in a temp directory and checks the
//! exit status (the deduction) and the printed report.

use std::path::{Path, PathBuf};
use std::process::Command;

fn cppstyle_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cppstyle")
}

/// Run the binary on `files` and return (exit_code, stdout)
fn run_check(files: &[&PathBuf]) -> (i32, String) {
    let output = Command::new(cppstyle_bin())
        .args(files)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run cppstyle");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(-1);
    (code, stdout)
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

const CLEAN_HEADER: &str = "\
#ifndef SONG_H
#define SONG_H

#include <string>

#define MAX_TITLE_LENGTH 128

class Song {
public:
    Song();
    void play();
    std::string title() const;

private:
    std::string title_;
    int length_;
};

#endif
";

const CLEAN_SOURCE: &str = "\
#include \"Song.h\"

static int playCount = 0;

Song::Song() {
}

void Song::play() {
    int elapsed = 0;
    playCount++;
}
";

#[test]
fn test_clean_files_exit_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let header = write(dir.path(), "Song.h", CLEAN_HEADER);
    let source = write(dir.path(), "Song.cpp", CLEAN_SOURCE);

    let (code, stdout) = run_check(&[&header, &source]);

    assert_eq!(code, 0, "stdout:\n{stdout}");
    assert!(stdout.contains("Checking file: Song.h"));
    assert!(stdout.contains("Checking file: Song.cpp"));
    assert!(stdout.contains("No style issues found"));
    assert!(stdout.contains("Deduction: 0"));
    assert!(!stdout.contains("Skipped"));
}

#[test]
fn test_single_error_exits_ten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "main.cpp", "void MyFunction() {}\n");

    let (code, stdout) = run_check(&[&source]);

    assert_eq!(code, 10, "stdout:\n{stdout}");
    assert!(stdout.contains("Deduction: -10"));
    assert!(stdout.contains("1. [main.cpp] function name 'MyFunction' should use lowercase with underscores"));
}

#[test]
fn test_errors_accumulate_across_files_and_clamp() {
    let dir = tempfile::tempdir().expect("tempdir");
    // 3 errors: missing guard, bad class name, bad macro name
    let header = write(dir.path(), "player.h", "class media_player {};\n#define max_volume 11\n");
    let (code, _) = run_check(&[&header]);
    assert_eq!(code, 14);

    // 3 more errors in a second file
    let source = write(
        dir.path(),
        "player.cpp",
        "void DoThing() {}\nWidget::Gadget() {}\nint Total = 0;\n",
    );
    let (code, stdout) = run_check(&[&header, &source]);
    assert_eq!(code, 20, "stdout:\n{stdout}");
    // Listing keeps detection order across files
    let first = stdout.find("1. [player.h]").expect("first listed");
    let last = stdout.find("6. [player.cpp]").expect("last listed");
    assert!(first < last);
}

#[test]
fn test_warnings_do_not_deduct() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "globals.cpp", "int counter = 0;\nbool ready;\n");

    let (code, stdout) = run_check(&[&source]);

    assert_eq!(code, 0, "stdout:\n{stdout}");
    assert!(stdout.contains("Found 2 style issues (0 errors, 2 warnings)"));
    assert!(stdout.contains("Deduction: 0"));
    assert!(!stdout.contains("Issues:"));
}

#[test]
fn test_missing_file_warns_and_continues() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does_not_exist.cpp");
    let source = write(dir.path(), "main.cpp", "void MyFunction() {}\n");

    let (code, stdout) = run_check(&[&missing, &source]);

    assert_eq!(code, 10, "stdout:\n{stdout}");
    assert!(stdout.contains("warning: file does not exist"));
    assert!(stdout.contains("does_not_exist.cpp"));
    assert!(stdout.contains("Skipped 1 file that could not be read"));
    assert!(stdout.contains("Checking file: main.cpp"));
}

#[test]
fn test_non_utf8_file_is_still_checked() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("main.cpp");
    let mut bytes = b"// ".to_vec();
    bytes.extend_from_slice(&[0xc4, 0xe3, 0xba, 0xc3]);
    bytes.extend_from_slice(b"\nvoid MyFunction() {}\nclass bad_name {};\n");
    std::fs::write(&path, bytes).expect("write fixture");

    let (code, stdout) = run_check(&[&path]);

    assert_eq!(code, 12, "stdout:\n{stdout}");
    assert!(!stdout.contains("warning: failed to read"));
    assert!(stdout.contains("Checking file: main.cpp"));
    assert!(stdout.contains("function name 'MyFunction'"));
    assert!(stdout.contains("class name 'bad_name'"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = Command::new(cppstyle_bin())
        .output()
        .expect("Failed to run cppstyle");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: cppstyle"));
}
