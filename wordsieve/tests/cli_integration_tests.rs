// wordsieve/tests/cli_integration_tests.rs
//! Command-line integration tests for the `wordsieve` binary.
//!
//! These tests execute the real executable with `assert_cmd`, feeding input
//! over stdin and asserting on stdout/stderr, covering:
//! - Redaction with the embedded demo vocabulary and with custom files.
//! - JSON and human-readable scan output.
//! - Context extraction and the no-match path.
//! - Config validation failures surfacing as clean errors.
//!
//! `tempfile` provides throwaway vocabulary files so the tests are isolated
//! and leave no artifacts.

use std::io::Write;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Helper to run the `wordsieve` binary with the given stdin and arguments.
fn run_wordsieve_command(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("wordsieve").unwrap();
    // Debug logs from the spawned process are useful when a test fails.
    cmd.env("RUST_LOG", "debug");
    cmd.env("WORDSIEVE_ALLOW_DEBUG_TERMS", "true");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes().to_vec());
    cmd.assert()
}

/// Writes a vocabulary YAML file usable via `--config`.
fn write_vocab(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

const TEST_VOCAB: &str = r#"
terms:
  - "secretplan"
sentence_delimiters: [".", ";"]
"#;

#[test]
fn test_redact_with_custom_vocabulary() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command(
        "the secretplan is ready",
        &["redact", "--config", &config],
    )
    .success()
    .stdout("the ********** is ready\n");
    Ok(())
}

#[test]
fn test_redact_with_default_vocabulary() {
    run_wordsieve_command("this memo is classified", &["redact"])
        .success()
        .stdout("this memo is **********\n");
}

#[test]
fn test_redact_no_match_passes_input_through() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command("nothing here", &["redact", "--config", &config])
        .success()
        .stdout("nothing here\n");
    Ok(())
}

#[test]
fn test_redact_custom_replace_char() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command(
        "the secretplan is ready",
        &["redact", "--config", &config, "--replace-char", "#"],
    )
    .success()
    .stdout("the ########## is ready\n");
    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    let assert = run_wordsieve_command(
        "xx secretplan yy",
        &["scan", "--json", "--config", &config],
    )
    .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let matches: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(matches[0]["term"], "secretplan");
    assert_eq!(matches[0]["start"], 3);
    assert_eq!(matches[0]["end"], 13);
    assert_eq!(matches.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn test_scan_human_listing() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command("xx secretplan yy", &["scan", "--config", &config])
        .success()
        .stdout(predicate::str::contains("[3..13] secretplan"))
        .stderr(predicate::str::contains("--- Scan Summary ---"));
    Ok(())
}

#[test]
fn test_scan_longest_policy() -> Result<()> {
    let vocab = write_vocab("terms:\n  - \"中国\"\n  - \"中国人\"\n")?;
    let config = vocab.path().to_str().unwrap().to_string();

    let assert = run_wordsieve_command(
        "我是中国人",
        &["scan", "--json", "--policy", "longest", "--config", &config],
    )
    .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let matches: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(matches[0]["term"], "中国人");
    assert_eq!(matches[0]["start"], 2);
    assert_eq!(matches[0]["end"], 5);
    Ok(())
}

#[test]
fn test_context_window() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command(
        "intro. the secretplan is here; outro.",
        &["context", "--config", &config],
    )
    .success()
    .stdout(" the secretplan is here\n");
    Ok(())
}

#[test]
fn test_context_without_matches_prints_nothing_to_stdout() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command("all quiet", &["context", "--config", &config])
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn test_invalid_vocabulary_fails_cleanly() -> Result<()> {
    let vocab = write_vocab("terms:\n  - \"ok\"\n  - \"\"\n")?;
    let config = vocab.path().to_str().unwrap().to_string();

    run_wordsieve_command("whatever", &["redact", "--config", &config])
        .failure()
        .stderr(predicate::str::contains("Failed to load vocabulary"));
    Ok(())
}

#[test]
fn test_input_file_argument() -> Result<()> {
    let vocab = write_vocab(TEST_VOCAB)?;
    let config = vocab.path().to_str().unwrap().to_string();

    let mut input = NamedTempFile::new()?;
    input.write_all("the secretplan is ready".as_bytes())?;
    let input_path = input.path().to_str().unwrap().to_string();

    run_wordsieve_command("", &["redact", "--config", &config, "-i", &input_path])
        .success()
        .stdout("the ********** is ready\n");
    Ok(())
}
