//! Config layering as seen from the command line.

use predicates::prelude::*;
use tempfile::tempdir;

use super::common::{TEAM_PORTFOLIO, folio, robot_json, write_file};

#[test]
fn project_config_sets_defaults() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "data/team.toml", TEAM_PORTFOLIO);
    write_file(
        dir.path(),
        ".skillfolio/config.toml",
        "[data]\npath = \"../data/team.toml\"\n\n[browser]\ndefault_view = \"cloud\"\ndefault_category = \"Storage\"\n",
    );

    let json = robot_json(dir.path(), &["skills"]);
    assert_eq!(json["data"]["view"], "cloud");
    assert_eq!(json["data"]["count"], 2);

    // Flags still win over config.
    let json = robot_json(dir.path(), &["skills", "-c", "All", "--view", "cards"]);
    assert_eq!(json["data"]["view"], "cards");
    assert_eq!(json["data"]["count"], 5);
}

#[test]
fn project_config_found_from_subdirectory() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        ".skillfolio/config.toml",
        "[browser]\ndefault_category = \"Cloud\"\n",
    );
    let nested = dir.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    let output = folio(dir.path())
        .current_dir(&nested)
        .args(["--robot", "skills"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], 2);
}

#[test]
fn env_overrides_beat_config_file() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "custom.toml",
        "[robot]\nformat = \"plain\"\n\n[projects]\ntech_filter_limit = 2\n",
    );

    // Config asks for plain output.
    folio(dir.path())
        .env("FOLIO_CONFIG", &config)
        .args(["skills", "-s", "grafana"])
        .assert()
        .success()
        .stdout("Monitoring\tGrafana\n");

    let output = folio(dir.path())
        .env("FOLIO_CONFIG", &config)
        .env("FOLIO_PROJECTS_TECH_FILTER_LIMIT", "1")
        .args(["--robot", "projects"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["filters"], serde_json::json!(["all", "React"]));
}

#[test]
fn malformed_env_override_is_config_error() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path())
        .env("FOLIO_PROFICIENCY_DEFAULT_LEVEL", "high")
        .args(["--robot", "stats"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "config");
}

#[test]
fn malformed_output_format_is_config_error() {
    let dir = tempdir().unwrap();
    let output = folio(dir.path())
        .env("FOLIO_ROBOT_FORMAT", "yaml")
        .args(["--robot", "stats"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "config");

    let config = write_file(dir.path(), "yaml.toml", "[robot]\nformat = \"yaml\"\n");
    folio(dir.path())
        .env("FOLIO_CONFIG", &config)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}
