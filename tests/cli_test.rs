#![cfg(feature = "std")]

use std::path::PathBuf;
use std::process::{Command, Output};

const PUZZLE: &str = "3 2 2 1 1\n2 2 2 0 2 1\n4 1 0 3 0 1\n";

fn write_puzzle(name: &str) -> PathBuf {
    write_puzzle_text(name, PUZZLE)
}

fn write_puzzle_text(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("solitaire-cli-{}-{}.txt", name, std::process::id()));
    std::fs::write(&path, text).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solitaire"))
        .args(args)
        .env("SOLITAIRE_LOG", "off")
        .output()
        .expect("failed to run solitaire binary")
}

#[test]
fn test_prints_board_and_score() {
    let path = write_puzzle("plain");
    let output = run(&[path.to_str().unwrap(), "200", "--seed", "7"]);
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.starts_with("Best Solution: "));
    assert!(stdout.contains("   2 2 2 0 2 1"));
    assert!(stdout.lines().any(|l| l.starts_with("SCORE: ")));
}

#[test]
fn test_json_output_is_reproducible() {
    let path = write_puzzle("json");
    let p = path.to_str().unwrap();
    let first = run(&[p, "200", "--seed", "12345", "--json"]);
    let second = run(&[p, "200", "--seed", "12345", "--json"]);
    std::fs::remove_file(&path).ok();

    assert!(first.status.success());
    let stdout = String::from_utf8(first.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["score"].is_u64());
    assert!(v["termination"].is_string());
    assert_eq!(v["ships"].as_array().map(|a| a.len()), Some(5));
    let grid = v["grid"].as_array().expect("grid rows");
    assert_eq!(grid.len(), 6);
    assert!(grid.iter().all(|row| row.as_str().map(|s| s.len()) == Some(11)));
    assert_eq!(v["config"]["seed"], 12345);

    assert_eq!(stdout, String::from_utf8(second.stdout).unwrap());
}

#[test]
fn test_bad_puzzle_fails() {
    let path = std::env::temp_dir().join("solitaire-cli-missing.txt");
    let output = run(&[path.to_str().unwrap(), "10"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load puzzle"));
}

#[test]
fn test_json_grid_ignores_target_width() {
    let path = write_puzzle_text("wide", "1\n1\n100\n");
    let output = run(&[path.to_str().unwrap(), "5", "--seed", "1", "--stall-limit", "5", "--json"]);
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["grid"], serde_json::json!(["X"]));
    assert_eq!(v["score"], 99);
}
