//! Exit-code and output handling against a scripted stand-in for `rg`.
//!
//! The script picks its behaviour from the value following `-e`, so every test shares one
//! executable written once up front.
#![cfg(unix)]

use rg_mcp_search::{RgLocator, SearchError, SearchLimits, SearchRequest, Searcher, NO_MATCHES};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::OnceLock;

const SCRIPT: &str = r#"#!/bin/sh
pattern=""
while [ "$#" -gt 0 ]; do
  if [ "$1" = "-e" ]; then
    pattern="$2"
    break
  fi
  shift
done
case "$pattern" in
  invalid-utf8) printf 'notes.txt\n1:caf\377\n' ;;
  no-match) exit 1 ;;
  *MissingDef*) exit 1 ;;
  broken) echo 'regex parse error: unclosed group' >&2; exit 2 ;;
  partial) printf 'notes.txt\n1:partial hit\n'; echo 'permission denied' >&2; exit 2 ;;
  many-lines)
    i=1
    while [ "$i" -le 400 ]; do
      echo "line $i"
      i=$((i + 1))
    done
    ;;
  *) printf 'pattern=[%s]\n' "$pattern" ;;
esac
"#;

fn scripted_rg() -> PathBuf {
    static SCRIPT_PATH: OnceLock<(tempfile::TempDir, PathBuf)> = OnceLock::new();
    let (_dir, path) = SCRIPT_PATH.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rg");
        fs::write(&path, SCRIPT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path.clone()
}

fn searcher(limits: SearchLimits) -> Searcher {
    Searcher::new(
        RgLocator::isolated(Vec::new()).with_explicit(Some(scripted_rg())),
        limits,
    )
}

async fn search(pattern: &str) -> Result<rg_mcp_search::SearchOutcome, SearchError> {
    let folder = tempfile::tempdir().unwrap();
    searcher(SearchLimits::default())
        .search_files(&SearchRequest::new(pattern, folder.path()))
        .await
}

#[tokio::test]
async fn invalid_utf8_is_replaced() {
    let outcome = search("invalid-utf8").await.unwrap();
    assert!(outcome.matched);
    assert!(outcome.body.contains("1:caf\u{FFFD}"), "{}", outcome.body);
}

#[tokio::test]
async fn exit_one_yields_no_matches_message() {
    let outcome = search("no-match").await.unwrap();
    assert!(!outcome.matched);
    assert_eq!(outcome.body, NO_MATCHES);
    assert!(outcome
        .render()
        .starts_with("Search completed in "));
}

#[tokio::test]
async fn exit_two_without_output_is_execution_failure() {
    let err = search("broken").await.unwrap_err();
    match err {
        SearchError::ExecutionFailure(message) => {
            assert_eq!(message, "regex parse error: unclosed group")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn exit_two_with_output_keeps_partial_results() {
    let outcome = search("partial").await.unwrap();
    assert!(outcome.body.contains("1:partial hit"));
}

#[tokio::test]
async fn long_output_is_cut_to_the_cap() {
    let outcome = search("many-lines").await.unwrap();
    assert!(outcome.truncated);
    assert!(outcome.body.contains("line 300\n"));
    assert!(!outcome.body.contains("line 301"));
    assert!(outcome
        .body
        .ends_with("\n... (output truncated to 300 lines)"));
    assert_eq!(outcome.body.lines().count(), 301);
}

#[tokio::test]
async fn whitespace_pattern_reaches_rg_unchanged() {
    let outcome = search("    ").await.unwrap();
    assert_eq!(outcome.body.trim_end(), "pattern=[    ]");
}

#[tokio::test]
async fn definition_miss_names_the_symbol() {
    let folder = tempfile::tempdir().unwrap();
    let outcome = searcher(SearchLimits::default())
        .search_definitions("MissingDef", folder.path())
        .await
        .unwrap();
    assert!(!outcome.matched);
    assert_eq!(
        outcome.body,
        "No Python definitions found for 'MissingDef'"
    );
}
