//! Skill catalog: the ordered category -> skills mapping.
//!
//! The catalog is built once at startup and never mutated. Category order is
//! the definition order and every derived view follows it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browser::CategoryFilter;
use crate::error::{FolioError, Result};

/// Opaque icon key carried through the data. Resolution to a glyph is the
/// renderer's job (see [`crate::browser::icons::IconProvider`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: IconRef,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new<I, S>(name: impl Into<String>, icon: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            icon: IconRef::new(icon),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    /// Build a catalog, rejecting empty data, duplicate category names and
    /// duplicate skills inside one category. The same skill may appear under
    /// several categories.
    pub fn new(categories: Vec<SkillCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(FolioError::InvalidCatalog(
                "catalog must define at least one category".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(FolioError::InvalidCatalog(
                    "category name must not be empty".to_string(),
                ));
            }
            if category.name == CategoryFilter::ALL {
                return Err(FolioError::InvalidCatalog(format!(
                    "category name {:?} is reserved",
                    CategoryFilter::ALL
                )));
            }
            if !names.insert(category.name.as_str()) {
                return Err(FolioError::InvalidCatalog(format!(
                    "duplicate category {:?}",
                    category.name
                )));
            }

            let mut skills = HashSet::new();
            for skill in &category.skills {
                if skill.trim().is_empty() {
                    return Err(FolioError::InvalidCatalog(format!(
                        "empty skill name in category {:?}",
                        category.name
                    )));
                }
                if !skills.insert(skill.as_str()) {
                    return Err(FolioError::InvalidCatalog(format!(
                        "duplicate skill {:?} in category {:?}",
                        skill, category.name
                    )));
                }
            }
        }

        let catalog = Self { categories };
        debug!(
            target: "catalog",
            categories = catalog.len(),
            skills = catalog.total_skills(),
            "catalog validated"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn total_skills(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// `All` followed by every category, in definition order.
    #[must_use]
    pub fn filter_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.category_names().map(CategoryFilter::named))
            .collect()
    }

    /// Does `category` list this skill?
    #[must_use]
    pub fn contains_skill(&self, category: &str, skill: &str) -> bool {
        self.get(category)
            .is_some_and(|c| c.skills.iter().any(|s| s == skill))
    }
}

impl<'de> Deserialize<'de> for SkillCatalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let categories = Vec::<SkillCategory>::deserialize(deserializer)?;
        Self::new(categories).map_err(serde::de::Error::custom)
    }
}
