//! Command-line behaviour of the `rowscan` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn rowscan(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rowscan"))
        .current_dir(dir)
        .args(args)
        .arg("--no-color")
        .env_remove("ROWSCAN_TYPES")
        .env_remove("ROWSCAN_OUTPUT")
        .env_remove("ROWSCAN_RUNTIME")
        .output()
        .expect("failed to run rowscan")
}

#[test]
fn missing_types_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("row.rs"), "pub struct Row { pub id: i64 }\n").unwrap();

    let output = rowscan(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--types"));
}

#[test]
fn empty_types_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("row.rs"), "pub struct Row { pub id: i64 }\n").unwrap();

    let output = rowscan(dir.path(), &["--types", ""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn current_directory_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let models = dir.path().join("models");
    fs::create_dir(&models).unwrap();
    fs::write(models.join("row.rs"), "pub struct Row { pub id: i64, pub name: String }\n").unwrap();

    let output = rowscan(&models, &["--types", "Row"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("// Code generated by rowscan for package `models`. DO NOT EDIT.\n"));
    assert!(stdout.contains("use rowscan::prelude::*;"));
    assert!(stdout.contains("let row = self;"));
    assert!(stdout.contains("sc.scan(&mut [&mut row.id, &mut row.name])"));
    syn::parse_file(&stdout).expect("output should be valid Rust");
}

#[test]
fn explicit_files_have_no_package_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "pub struct Row { pub id: i64 }\n").unwrap();
    fs::write(dir.path().join("b.rs"), "pub struct User { pub email: String }\n").unwrap();

    let output = rowscan(dir.path(), &["-t", "Row,User", "--runtime", "crate::db", "a.rs", "b.rs"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("// Code generated by rowscan. DO NOT EDIT.").count(), 2);
    assert_eq!(stdout.matches("use crate::db::prelude::*;").count(), 2);
    assert!(stdout.find("impl ScanRow for Row").unwrap() < stdout.find("impl ScanRow for User").unwrap());
}

#[test]
fn output_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("row.rs"), "pub struct Row { pub id: i64 }\n").unwrap();
    let out_path = dir.path().join("scanners.txt");
    fs::write(&out_path, "// existing content\n").unwrap();

    let output = rowscan(dir.path(), &["--types", "Row", "--output", "scanners.txt", "row.rs"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("// existing content\n// Code generated by rowscan."));
    assert!(written.contains("impl ScanRow for Row {"));
}

#[test]
fn unopenable_output_file_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("row.rs"), "pub struct Row { pub id: i64 }\n").unwrap();

    let output = rowscan(dir.path(), &["--types", "Row", "--output", "missing_dir/out.rs", "row.rs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr.lines().find(|line| line.starts_with("error:")).expect("an error line");
    assert!(line.contains("Failed to open output file"));
    assert!(line.contains("missing_dir"));
    assert!(!dir.path().join("missing_dir").exists());
}

#[test]
fn parse_failure_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.rs"), "pub struct Row { pub id i64 }\n").unwrap();

    let output = rowscan(dir.path(), &["--types", "Row", "bad.rs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("bad.rs:1:"));
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = rowscan(dir.path(), &["--types", "Row", "nowhere"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere"));
}
