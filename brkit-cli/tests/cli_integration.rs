//! Integration tests for the brkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn brkit() -> Command {
    Command::cargo_bin("brkit").unwrap()
}

#[test]
fn test_process_english_sentences() {
    brkit()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("english.txt"))
        .assert()
        .success()
        .stdout("The cat sat.\nIt was happy!\nWas it?\n");
}

#[test]
fn test_process_japanese_sentences() {
    brkit()
        .args(["process", "-q", "-i"])
        .arg(fixture_path("japanese.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("これはテストです。\n"))
        .stdout(predicate::str::contains("日本語の文章を分割します。\n"));
}

#[test]
fn test_process_words_as_markdown() {
    brkit()
        .args(["process", "-q", "-k", "word", "-f", "markdown", "-i"])
        .arg(fixture_path("english.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. The\n2. cat\n3. sat\n4. .\n"))
        .stdout(predicate::str::contains("*Total segments: 11*"));
}

#[test]
fn test_process_lines_as_json() {
    let output = brkit()
        .args(["process", "-q", "-k", "line", "-f", "json", "-i"])
        .arg(fixture_path("english.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let file = &value[0];
    assert_eq!(file["metadata"]["kind"], "line");
    assert_eq!(file["metadata"]["segment_count"], 8);
    assert_eq!(file["segments"][2]["text"], "sat. ");
    assert_eq!(file["segments"][2]["start"], 8);
}

#[test]
fn test_output_file_and_glob() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), "Second file.").unwrap();
    fs::write(dir.path().join("a.txt"), "First file.").unwrap();
    let out = dir.path().join("out.txt");

    brkit()
        .args(["process", "-q", "--parallel", "-i"])
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(out).unwrap(), "First file.\nSecond file.\n");
}

#[test]
fn test_config_file_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("brkit.toml");
    fs::write(
        &config,
        "[processing]\ndefault_kind = \"word\"\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    brkit()
        .args(["process", "-q", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(fixture_path("english.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. The\n"));
}

#[test]
fn test_custom_table_round_trip() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("cluster.toml");
    let input = dir.path().join("input.txt");
    fs::write(&input, "e\u{0301}x").unwrap();

    brkit()
        .args(["generate-config", "-o"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("brkit validate -t"));

    brkit()
        .args(["validate", "-t"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Table is valid!"))
        .stdout(predicate::str::contains("Name: cluster"));

    brkit()
        .args(["process", "-q", "-t"])
        .arg(&table)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("e\u{0301}\nx\n");
}

#[test]
fn test_generate_config_to_stdout() {
    brkit()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[metadata]"))
        .stdout(predicate::str::contains("[forward]"));
}

#[test]
fn test_validate_rejects_broken_table() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("broken.toml");
    fs::write(
        &table,
        "[metadata]\nname = \"x\"\n[classes]\nnames = [\"a\", \"eot\"]\n\
         [forward]\nrows = [[\"*1\"]]\n[backward]\nrows = [[\"stop\", \"stop\"]]\n",
    )
    .unwrap();

    brkit()
        .args(["validate", "-t"])
        .arg(&table)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Table is invalid!"))
        .stdout(predicate::str::contains("forward state 1 has 1 cells"));
}

#[test]
fn test_list_kinds_and_formats() {
    brkit()
        .args(["list", "kinds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("character"))
        .stdout(predicate::str::contains("sentence"));

    brkit()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    brkit()
        .args(["process", "-k", "paragraph", "-i"])
        .arg(fixture_path("english.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("paragraph"));
}

#[test]
fn test_missing_input_fails() {
    brkit()
        .args(["process", "-q", "-i", "/nonexistent/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}
