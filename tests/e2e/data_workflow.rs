//! A custom portfolio data file flowing through every read-only command.

use predicates::prelude::*;
use tempfile::tempdir;

use super::common::{TEAM_PORTFOLIO, folio, robot_json, write_file};

#[test]
fn custom_portfolio_end_to_end() {
    let dir = tempdir().unwrap();
    let data = write_file(dir.path(), "team.toml", TEAM_PORTFOLIO);
    let data = data.to_str().unwrap();

    let json = robot_json(dir.path(), &["--data", data, "stats"]);
    assert_eq!(json["data"]["source"], data);
    assert_eq!(json["data"]["total_skills"], 5);

    // Categories in file order.
    let json = robot_json(dir.path(), &["--data", data, "categories"]);
    let names: Vec<&str> = json["data"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Languages", "Storage"]);

    // Query narrows, category narrows further.
    let json = robot_json(dir.path(), &["--data", data, "skills", "-s", "r"]);
    assert_eq!(json["data"]["count"], 4);
    let json = robot_json(
        dir.path(),
        &["--data", data, "skills", "-s", "red", "-c", "Storage"],
    );
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["categories"][0]["skills"][0], "Redis");

    // Cloud view uses the file's proficiency table.
    let json = robot_json(
        dir.path(),
        &["--data", data, "skills", "--view", "cloud"],
    );
    let skills = json["data"]["skills"].as_array().unwrap();
    assert_eq!(skills[0]["skill"], "Rust");
    assert_eq!(skills[0]["band"], "high");
    assert_eq!(skills[1]["band"], "mid");
    assert_eq!(skills[4]["skill"], "Redis");
    assert_eq!(skills[4]["level"], 2);

    // Projects and their technology filters.
    let json = robot_json(dir.path(), &["--data", data, "projects"]);
    assert_eq!(
        json["data"]["filters"],
        serde_json::json!(["all", "Rust", "Redis", "TypeScript", "PostgreSQL"])
    );
    let json = robot_json(dir.path(), &["--data", data, "projects", "--tech", "Redis"]);
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["projects"][0]["title"], "Ingest pipeline");

    // Human output for the same data.
    folio(dir.path())
        .args(["--data", data, "skills", "-c", "Languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages 3 skills"))
        .stdout(predicate::str::contains("3 of 5 skills shown"));
}

#[test]
fn out_of_range_proficiency_is_rejected() {
    let dir = tempdir().unwrap();
    let data = write_file(
        dir.path(),
        "bad.toml",
        "[[categories]]\nname = \"A\"\nicon = \"code\"\nskills = [\"x\"]\n\n[proficiency]\nx = 9\n",
    );
    let output = folio(dir.path())
        .arg("--robot")
        .arg("--data")
        .arg(&data)
        .arg("stats")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "validation_failed");
}
