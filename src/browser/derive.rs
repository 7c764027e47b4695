//! Derivation engine: pure functions from (catalog, filter state) to the
//! visible subset of skills.
//!
//! Output never contains a skill the catalog does not list under the same
//! category, and category and skill order always follow the catalog.

use serde::Serialize;

use crate::portfolio::{IconRef, SkillCatalog};

use super::state::FilterState;

/// A category with the skills that survived the current filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleCategory {
    pub category: String,
    pub icon: IconRef,
    pub skills: Vec<String>,
}

/// One element of the flat cloud list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudEntry {
    pub skill: String,
    pub category: String,
    pub icon: IconRef,
}

/// Case-insensitive substring match. An empty query matches everything.
#[must_use]
pub fn skill_matches(skill: &str, query: &str) -> bool {
    matches_lowered(skill, &query.to_lowercase())
}

fn matches_lowered(skill: &str, needle: &str) -> bool {
    skill.to_lowercase().contains(needle)
}

/// Categories (in catalog order) that have at least one skill matching the
/// query and are admitted by the active category filter.
///
/// A category filter naming a category the catalog does not know yields an
/// empty result rather than an error.
#[must_use]
pub fn derive_visible(catalog: &SkillCatalog, state: &FilterState) -> Vec<VisibleCategory> {
    let needle = state.search_query.to_lowercase();

    catalog
        .categories()
        .iter()
        .filter(|category| state.active_category.admits(&category.name))
        .filter_map(|category| {
            let skills: Vec<String> = category
                .skills
                .iter()
                .filter(|skill| matches_lowered(skill, &needle))
                .cloned()
                .collect();
            (!skills.is_empty()).then(|| VisibleCategory {
                category: category.name.clone(),
                icon: category.icon.clone(),
                skills,
            })
        })
        .collect()
}

/// Flatten the grouped view into `(skill, category)` pairs, keeping category
/// order and the skill order inside each category.
#[must_use]
pub fn flatten_cloud(visible: &[VisibleCategory]) -> Vec<CloudEntry> {
    visible
        .iter()
        .flat_map(|group| {
            group.skills.iter().map(move |skill| CloudEntry {
                skill: skill.clone(),
                category: group.category.clone(),
                icon: group.icon.clone(),
            })
        })
        .collect()
}
