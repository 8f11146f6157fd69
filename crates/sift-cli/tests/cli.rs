//! End-to-end CLI tests: spawn the real binary against JSON fixtures.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = r#"[
    {"id": 1, "title": "Task A", "estimated_hours": 2, "importance": 8, "due_date": "2025-11-20"},
    {"id": 2, "title": "Task B", "estimated_hours": 10, "importance": 5, "due_date": "2025-12-05"},
    {"id": 3, "title": "Task C", "estimated_hours": 1, "importance": 9, "dependencies": [1]}
]"#;

fn fixture_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write fixture");
    file
}

fn sift() -> Command {
    Command::cargo_bin("sift").expect("binary built")
}

#[test]
fn analyze_emits_ranked_json() {
    let file = fixture_file(FIXTURE);

    let output = sift()
        .args(["analyze", "--json", "--today", "2025-11-20"])
        .arg(file.path())
        .output()
        .expect("run analyze");

    assert!(output.status.success());
    let ranked: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let ranked = ranked.as_array().expect("array");

    assert_eq!(ranked.len(), 3);
    // Task A is due today with one dependent; it must lead the ranking.
    assert_eq!(ranked[0]["id"], "1");
    assert_eq!(ranked[0]["priority_level"], "High");
    let top_score = ranked[0]["score"].as_f64().expect("score");
    let next_score = ranked[1]["score"].as_f64().expect("score");
    assert!(top_score >= next_score);
}

#[test]
fn analyze_reads_stdin_dash() {
    sift()
        .args(["analyze", "-", "--strategy", "fastest_wins", "--json"])
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fastest Win"));
}

#[test]
fn unknown_strategy_fails_with_error() {
    let file = fixture_file(FIXTURE);

    sift()
        .args(["analyze", "--strategy", "alphabetical"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy: alphabetical"));
}

#[test]
fn malformed_json_fails_with_context() {
    let file = fixture_file("not json at all");

    sift()
        .args(["analyze"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse task file"));
}

#[test]
fn suggest_caps_at_three() {
    let five_tasks = r#"[
        {"id": 1, "importance": 9}, {"id": 2, "importance": 8},
        {"id": 3, "importance": 7}, {"id": 4, "importance": 6},
        {"id": 5, "importance": 5}
    ]"#;
    let file = fixture_file(five_tasks);

    let output = sift()
        .args(["suggest", "--json"])
        .arg(file.path())
        .output()
        .expect("run suggest");

    assert!(output.status.success());
    let ranked: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(ranked.as_array().expect("array").len(), 3);
}

#[test]
fn cycle_marker_appears_in_human_output() {
    let cyclic = r#"[
        {"id": "x", "title": "X", "dependencies": ["y"]},
        {"id": "y", "title": "Y", "dependencies": ["x"]}
    ]"#;
    let file = fixture_file(cyclic);

    sift()
        .arg("analyze")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[cycle]"))
        .stdout(predicate::str::contains("[CYCLE DETECTED]"));
}

#[test]
fn config_thresholds_change_the_buckets() {
    let config = fixture_file("[thresholds]\nhigh = 11.0\nmedium = 11.0\n");
    let file = fixture_file(FIXTURE);

    let output = sift()
        .args(["analyze", "--json", "--today", "2025-11-20", "--config"])
        .arg(config.path())
        .arg(file.path())
        .output()
        .expect("run analyze");

    assert!(output.status.success());
    let ranked: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    for entry in ranked.as_array().expect("array") {
        assert_eq!(entry["priority_level"], "Low", "nothing clears an 11.0 bar");
    }
}

#[test]
fn completions_generate_for_bash() {
    sift()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sift"));
}
