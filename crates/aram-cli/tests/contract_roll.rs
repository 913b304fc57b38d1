#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

fn aram() -> Command {
    let mut cmd = Command::cargo_bin("aram").unwrap();
    cmd.env_remove("ARAM_SHARE_BASE_URL")
        .env_remove("ARAM_DDRAGON_URL")
        .env_remove("ARAM_PATCH_VERSION")
        .env("ARAM_OFFLINE", "1");
    cmd
}

fn roll_json(args: &[&str]) -> Value {
    let output = aram()
        .arg("roll")
        .args(args)
        .args(["--offline", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "roll failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("roll --format json must print JSON")
}

fn team_ids(report: &Value, team: usize) -> Vec<String> {
    report["teams"][team]["champions"]
        .as_array()
        .expect("champions array")
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn same_seed_same_teams() {
    let first = roll_json(&["contract-seed"]);
    let second = roll_json(&["contract-seed"]);
    assert_eq!(first, second);

    assert_eq!(first["seed"], "contract-seed");
    assert_eq!(first["team_size"], 15);
    assert_eq!(first["language"], "en");
    assert_eq!(first["share_url"], "http://localhost:3000/contract-seed");

    let left = team_ids(&first, 0);
    let right = team_ids(&first, 1);
    assert_eq!(left.len(), 15);
    assert_eq!(right.len(), 15);
    let all: HashSet<_> = left.iter().chain(right.iter()).collect();
    assert_eq!(all.len(), 30, "teams must not share champions");
}

#[test]
fn different_seeds_differ() {
    let a = roll_json(&["alpha"]);
    let b = roll_json(&["beta"]);
    assert_ne!(team_ids(&a, 0), team_ids(&b, 0));
}

#[test]
fn size_and_language_flow_into_the_link() {
    let report = roll_json(&["abc", "--size", "12", "--lang", "vi"]);
    assert_eq!(report["team_size"], 12);
    assert_eq!(report["language"], "vi");
    assert_eq!(report["share_url"], "http://localhost:3000/abc?size=12&lang=vi");
    assert_eq!(team_ids(&report, 0).len(), 12);
    assert_eq!(report["teams"][0]["badge"], "Thái Dương");
}

#[test]
fn size_is_clamped() {
    assert_eq!(roll_json(&["abc", "--size", "3"])["team_size"], 10);
    assert_eq!(roll_json(&["abc", "--size", "-5"])["team_size"], 10);
    assert_eq!(roll_json(&["abc", "--size", "99"])["team_size"], 20);
    assert_eq!(roll_json(&["abc", "--size", "nope"])["team_size"], 15);
}

#[test]
fn link_reproduces_the_roll() {
    let direct = roll_json(&["abc", "--size", "11"]);
    let link = direct["share_url"].as_str().unwrap().to_string();
    let via_link = roll_json(&["--link", &link]);
    assert_eq!(direct, via_link);
}

#[test]
fn share_base_url_is_configurable() {
    let report = roll_json(&["abc", "--base-url", "https://aram.example/play/"]);
    assert_eq!(report["share_url"], "https://aram.example/play/abc");
}

#[test]
fn report_includes_summaries_and_insights() {
    let report = roll_json(&["stats"]);
    let summary = &report["teams"][0]["summary"];
    assert!(summary["unique_roles"].as_u64().unwrap() >= 1);
    assert!(summary["average_difficulty"].is_f64() || summary["average_difficulty"].is_u64());
    let metrics = report["insights"]["metrics"].as_array().unwrap();
    let names: Vec<_> = metrics.iter().map(|m| m["metric"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["attack", "defense", "magic", "difficulty"]);
    assert!(report["matchup_text"]
        .as_str()
        .unwrap()
        .starts_with("ARAM Seed: stats\nChampions per team: 15\n\nTeam 1 (15): "));
}

#[test]
fn text_output_shows_both_teams() {
    aram()
        .args(["roll", "abc", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ARAM Random Team Generator"))
        .stdout(predicate::str::contains("Team 1 · Sun Team (15 Champions)"))
        .stdout(predicate::str::contains("Team 2 · Moon Team (15 Champions)"))
        .stdout(predicate::str::contains("Matchup insights"))
        .stdout(predicate::str::contains("http://localhost:3000/abc"));
}

#[test]
fn small_dataset_is_an_invalid_argument() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"[{"id":"Ahri","key":"103","name":"Ahri","tags":["Mage"]},
            {"id":"Zed","key":"238","name":"Zed","tags":["Assassin"]}]"#,
    )
    .unwrap();

    aram()
        .args(["roll", "abc", "--data"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("drawing teams"));
}

#[test]
fn unreadable_dataset_is_a_data_error() {
    let dir = tempdir().unwrap();
    aram()
        .args(["roll", "abc", "--data"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3);
}

#[test]
fn link_without_seed_is_rejected() {
    aram()
        .args(["roll", "--offline", "--link", "http://localhost:3000/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no seed"));
}
