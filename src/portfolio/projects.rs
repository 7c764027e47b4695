//! Project list and the technology filter over it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of technology filters offered next to `all`.
pub const DEFAULT_TECH_FILTER_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TechFilter {
    #[default]
    All,
    Tech(String),
}

impl TechFilter {
    /// `"all"` (any case) selects everything; any other value is a technology.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Tech(value.to_string())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Tech(tech) => tech,
        }
    }
}

impl fmt::Display for TechFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct technologies in first-appearance order, truncated to `limit`.
#[must_use]
pub fn tech_filters(projects: &[Project], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.tech.iter())
        .filter(|tech| seen.insert(tech.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

/// Projects whose technology list contains the filter exactly.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], filter: &TechFilter) -> Vec<&'a Project> {
    match filter {
        TechFilter::All => projects.iter().collect(),
        TechFilter::Tech(tech) => projects
            .iter()
            .filter(|p| p.tech.iter().any(|t| t == tech))
            .collect(),
    }
}
