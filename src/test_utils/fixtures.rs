use std::path::PathBuf;

use tempfile::TempDir;

use crate::portfolio::{SkillCatalog, SkillCategory};

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a portfolio data file built from `categories`.
    #[must_use]
    pub fn create_portfolio(&self, name: &str, categories: &[(&str, &str, &[&str])]) -> PathBuf {
        self.create_file(name, &portfolio_toml(categories))
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}

/// `{ "CI/CD": [Jenkins, GitHub Actions], "Cloud": [AWS, Azure] }`
#[must_use]
pub fn scenario_catalog() -> SkillCatalog {
    SkillCatalog::new(vec![
        SkillCategory::new("CI/CD", "code", ["Jenkins", "GitHub Actions"]),
        SkillCategory::new("Cloud", "cloud", ["AWS", "Azure"]),
    ])
    .expect("scenario catalog is valid")
}

/// Render `(name, icon, skills)` triples as portfolio TOML.
#[must_use]
pub fn portfolio_toml(categories: &[(&str, &str, &[&str])]) -> String {
    let mut out = String::new();
    for (name, icon, skills) in categories {
        let skills = skills
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "[[categories]]\nname = {name:?}\nicon = {icon:?}\nskills = [{skills}]\n\n"
        ));
    }
    out
}
