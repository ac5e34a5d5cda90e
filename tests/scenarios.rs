//! End-to-end scenarios for userctl
//!
//! Drives argument parsing, validation and dispatch against temporary store
//! files, capturing output in memory.

use clap::Parser;
use std::fs;
use std::path::Path;
use userctl::cli::{normalize_args, Cli, Invocation};
use userctl::commands::perform;
use userctl::config::ConfigBuilder;
use userctl::domain::{Record, RemovalStrategy};
use userctl::error::{AppError, RecordError, StoreError};

const ALICE: &str = r#"{"id":"1","email":"a@b.com","age":30}"#;

/// Run one invocation the way the binary does, minus config file discovery
fn run(args: &[&str]) -> (Result<(), AppError>, String) {
    run_with(args, RemovalStrategy::Stable)
}

fn run_with(args: &[&str], removal: RemovalStrategy) -> (Result<(), AppError>, String) {
    let argv = std::iter::once("userctl").chain(args.iter().copied());
    let cli = Cli::try_parse_from(normalize_args(argv)).unwrap();

    let mut config = ConfigBuilder::new()
        .with_file_name(cli.file_name.clone())
        .with_pretty(cli.pretty.then_some(true))
        .build();
    config.store.removal = removal;

    let mut out = Vec::new();
    let result = Invocation::from_cli(&cli, &config)
        .into_request()
        .and_then(|request| perform(request, &config, &mut out));

    (result, String::from_utf8(out).unwrap())
}

fn stored(path: &Path) -> Vec<Record> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn seed(path: &Path, ids: &[&str]) {
    let records: Vec<Record> = ids
        .iter()
        .map(|id| Record::new(*id, format!("{}@example.com", id), 20))
        .collect();
    fs::write(path, serde_json::to_string(&records).unwrap()).unwrap();
}

#[test]
fn test_add_then_list_on_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "").unwrap();
    let file = path.to_str().unwrap();

    let (result, out) = run(&["-operation", "add", "-item", ALICE, "-fileName", file]);
    result.unwrap();
    assert!(out.is_empty());

    let (result, out) = run(&["-operation", "list", "-fileName", file]);
    result.unwrap();
    assert_eq!(out, r#"[{"id":"1","email":"a@b.com","age":30}]"#);
}

#[test]
fn test_add_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (result, _) = run(&[
        "-operation",
        "add",
        "-item",
        ALICE,
        "-fileName",
        path.to_str().unwrap(),
    ]);
    result.unwrap();

    assert_eq!(stored(&path), vec![Record::new("1", "a@b.com", 30)]);
}

#[test]
fn test_add_existing_id_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2"]);
    let before = fs::read_to_string(&path).unwrap();

    let (result, out) = run(&[
        "-operation",
        "add",
        "-item",
        ALICE,
        "-fileName",
        path.to_str().unwrap(),
    ]);
    result.unwrap();

    assert_eq!(out, "Item with id 1 already exists");
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_remove_missing_id_leaves_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2"]);
    let before = fs::read_to_string(&path).unwrap();

    let (result, out) = run(&[
        "-operation",
        "remove",
        "-id",
        "7",
        "-fileName",
        path.to_str().unwrap(),
    ]);
    result.unwrap();

    assert_eq!(out, "Item with id 7 not found");
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_remove_middle_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2", "3"]);
    let file = path.to_str().unwrap();

    let (result, out) = run(&["-operation", "remove", "-id", "2", "-fileName", file]);
    result.unwrap();
    assert!(out.is_empty());

    let ids: Vec<String> = stored(&path).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let (result, out) = run(&["-operation", "findById", "-id", "2", "-fileName", file]);
    result.unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_remove_with_swap_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2", "3"]);

    let (result, _) = run_with(
        &["-operation", "remove", "-id", "1", "-fileName", path.to_str().unwrap()],
        RemovalStrategy::Swap,
    );
    result.unwrap();

    let ids: Vec<String> = stored(&path).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn test_list_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (result, out) = run(&["-operation", "list", "-fileName", path.to_str().unwrap()]);
    result.unwrap();
    assert_eq!(out, "[]");
}

#[test]
fn test_find_present_and_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2"]);
    let file = path.to_str().unwrap();

    let (result, out) = run(&["--operation", "findById", "--id", "2", "--fileName", file]);
    result.unwrap();
    assert_eq!(out, r#"{"id":"2","email":"2@example.com","age":20}"#);

    let (result, out) = run(&["-operation", "findById", "-id", "9", "-fileName", file]);
    result.unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_pretty_list_decodes_to_same_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    seed(&path, &["1", "2"]);

    let (result, out) = run(&[
        "-operation",
        "list",
        "--pretty",
        "-fileName",
        path.to_str().unwrap(),
    ]);
    result.unwrap();

    let listed: Vec<Record> = serde_json::from_str(&out).unwrap();
    assert_eq!(listed, stored(&path));
}

#[test]
fn test_missing_file_name() {
    let (result, _) = run(&["-operation", "list"]);
    assert!(matches!(result, Err(AppError::MissingArgument("fileName"))));
}

#[test]
fn test_missing_operation() {
    let (result, _) = run(&["-fileName", "users.json"]);
    assert!(matches!(result, Err(AppError::MissingArgument("operation"))));
}

#[test]
fn test_invalid_operation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (result, _) = run(&["-operation", "drop", "-fileName", path.to_str().unwrap()]);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Operation drop not allowed!");
    assert!(!path.exists());
}

#[test]
fn test_malformed_item_rejected_before_store_access() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (result, _) = run(&[
        "-operation",
        "add",
        "-item",
        "{id: 1, email: test@test.com, age: 31}",
        "-fileName",
        path.to_str().unwrap(),
    ]);

    assert!(matches!(result, Err(AppError::Record(RecordError::Decode(_)))));
    assert!(!path.exists());
}

#[test]
fn test_corrupt_store_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    fs::write(&path, "not json").unwrap();

    let (result, out) = run(&["-operation", "list", "-fileName", path.to_str().unwrap()]);
    assert!(matches!(
        result,
        Err(AppError::Store(StoreError::Decode { .. }))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_add_partial_item_zero_fills() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let file = path.to_str().unwrap();

    let (result, _) = run(&[
        "-operation",
        "add",
        "-item",
        r#"{"id":"1","email":"a@b.com"}"#,
        "-fileName",
        file,
    ]);
    result.unwrap();

    let (result, out) = run(&["-operation", "findById", "-id", "1", "-fileName", file]);
    result.unwrap();
    assert_eq!(out, r#"{"id":"1","email":"a@b.com","age":0}"#);
}

#[test]
fn test_add_item_without_id_reports_missing_item() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    let (result, _) = run(&[
        "-operation",
        "add",
        "-item",
        r#"{"email":"a@b.com","age":30}"#,
        "-fileName",
        path.to_str().unwrap(),
    ]);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "-item flag has to be specified");
    assert!(!path.exists());
}
