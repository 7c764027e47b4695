//! Portfolio data: the skill catalog, proficiency levels, featured skills and
//! the project list.
//!
//! Data comes either from the built-in set compiled into the binary or from a
//! TOML data file:
//!
//! ```toml
//! featured = ["Kubernetes", "AWS"]
//!
//! [[categories]]
//! name = "Cloud"
//! icon = "cloud"
//! skills = ["AWS", "Azure"]
//!
//! [proficiency]
//! AWS = 5
//!
//! [[projects]]
//! title = "Platform migration"
//! tech = ["Kubernetes", "Terraform"]
//! ```

mod builtin;
pub mod catalog;
pub mod projects;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::browser::proficiency::ProficiencyTable;
use crate::error::{FolioError, Result};

pub use catalog::{IconRef, SkillCatalog, SkillCategory};
pub use projects::{Project, TechFilter, filter_projects, tech_filters};

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub catalog: SkillCatalog,
    pub proficiency: ProficiencyTable,
    pub featured: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    categories: SkillCatalog,
    #[serde(default)]
    proficiency: BTreeMap<String, u8>,
    #[serde(default)]
    featured: Vec<String>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl Portfolio {
    /// The data set compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::portfolio()
    }

    /// Load a portfolio data file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::NotFound(format!(
                "portfolio data file {}",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read data {}: {err}", path.display())))?;
        let portfolio = Self::from_toml(&raw).map_err(|err| match err {
            FolioError::Config(msg) => {
                FolioError::Config(format!("parse data {}: {msg}", path.display()))
            }
            other => other,
        })?;
        debug!(
            target: "portfolio",
            path = %path.display(),
            categories = portfolio.catalog.len(),
            projects = portfolio.projects.len(),
            "loaded portfolio data"
        );
        Ok(portfolio)
    }

    /// Parse a portfolio from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let file: PortfolioFile =
            toml::from_str(raw).map_err(|err| FolioError::Config(err.to_string()))?;
        let proficiency = ProficiencyTable::new(file.proficiency)?;
        let portfolio = Self {
            catalog: file.categories,
            proficiency,
            featured: file.featured,
            projects: file.projects,
        };
        portfolio.warn_unknown_featured();
        Ok(portfolio)
    }

    /// Either the file at `path` or the built-in data.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    fn warn_unknown_featured(&self) {
        for skill in &self.featured {
            let listed = self
                .catalog
                .categories()
                .iter()
                .any(|c| c.skills.iter().any(|s| s == skill));
            if !listed {
                warn!(target: "portfolio", skill = %skill, "featured skill is not in any category");
            }
        }
    }
}
