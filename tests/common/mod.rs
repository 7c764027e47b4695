//! Helpers shared by the integration and e2e suites.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;

const FOLIO_ENV: &[&str] = &[
    "FOLIO_CONFIG",
    "FOLIO_ROBOT",
    "FOLIO_DATA_PATH",
    "FOLIO_BROWSER_DEFAULT_VIEW",
    "FOLIO_BROWSER_DEFAULT_CATEGORY",
    "FOLIO_BROWSER_ICONS",
    "FOLIO_PROFICIENCY_DEFAULT_LEVEL",
    "FOLIO_PROJECTS_TECH_FILTER_LIMIT",
    "FOLIO_ROBOT_FORMAT",
    "RUST_LOG",
];

/// `skillfolio` isolated from the caller's config: `home` is both the working
/// directory and the config root.
pub fn folio(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skillfolio").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1");
    for key in FOLIO_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// Run with `--robot` and parse stdout.
pub fn robot_json(home: &Path, args: &[&str]) -> Value {
    let output = folio(home).arg("--robot").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "skillfolio {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Write `content` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

pub const TEAM_PORTFOLIO: &str = r#"
featured = ["Rust"]

[[categories]]
name = "Languages"
icon = "code"
skills = ["Rust", "Go", "TypeScript"]

[[categories]]
name = "Storage"
icon = "layers"
skills = ["PostgreSQL", "Redis"]

[proficiency]
Rust = 5
Go = 4
Redis = 2

[[projects]]
title = "Ingest pipeline"
tech = ["Rust", "Redis"]
metrics = ["40k events/s"]

[[projects]]
title = "Dashboard"
tech = ["TypeScript", "PostgreSQL"]
"#;
