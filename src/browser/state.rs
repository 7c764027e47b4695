use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Which categories are eligible for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Sentinel label for [`CategoryFilter::All`].
    pub const ALL: &'static str = "All";

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// `"All"` maps to the sentinel; anything else names a category.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Named(name) => name,
        }
    }

    /// Does this filter admit the category called `name`?
    #[must_use]
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(selected) => selected == name,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Grouped cards or the flat, size-weighted cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    Cloud,
}

impl ViewMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Cards => Self::Cloud,
            Self::Cloud => Self::Cards,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cards" | "card" | "grouped" => Ok(Self::Cards),
            "cloud" | "flat" => Ok(Self::Cloud),
            _ => Err(FolioError::ValidationFailed(format!(
                "invalid view mode {s} (expected cards|cloud)"
            ))),
        }
    }
}

/// Current search query, category selection and view mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub active_category: CategoryFilter,
    pub view_mode: ViewMode,
}

impl FilterState {
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.active_category = category;
        self
    }

    #[must_use]
    pub const fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// True when neither the query nor the category narrows the result.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.active_category.is_all()
    }
}

/// Message for the no-results state.
#[must_use]
pub fn empty_state_message(state: &FilterState) -> String {
    if state.search_query.is_empty() {
        format!("No skills found in category \"{}\"", state.active_category)
    } else {
        format!("No skills found matching \"{}\"", state.search_query)
    }
}

#[must_use]
pub fn skill_count_label(count: usize) -> String {
    if count == 1 {
        "1 skill".to_string()
    } else {
        format!("{count} skills")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_mount() {
        let state = FilterState::default();
        assert_eq!(state.search_query, "");
        assert_eq!(state.active_category, CategoryFilter::All);
        assert_eq!(state.view_mode, ViewMode::Cards);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn all_sentinel_is_exact() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::named("all"));
        assert!(CategoryFilter::All.admits("Cloud"));
        assert!(!CategoryFilter::named("Cloud").admits("IaC"));
    }

    #[test]
    fn view_mode_parse_and_toggle() {
        assert_eq!("Cloud".parse::<ViewMode>().unwrap(), ViewMode::Cloud);
        assert_eq!("cards".parse::<ViewMode>().unwrap(), ViewMode::Cards);
        assert!("grid".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Cards.toggle(), ViewMode::Cloud);
        assert_eq!(ViewMode::Cloud.toggle().toggle(), ViewMode::Cloud);
    }

    #[test]
    fn empty_state_names_the_narrowing_filter() {
        let query = FilterState::default()
            .with_query("zzz")
            .with_category(CategoryFilter::named("Cloud"));
        assert_eq!(empty_state_message(&query), "No skills found matching \"zzz\"");

        let category = FilterState::default().with_category(CategoryFilter::named("Data"));
        assert_eq!(empty_state_message(&category), "No skills found in category \"Data\"");
    }

    #[test]
    fn count_label() {
        assert_eq!(skill_count_label(1), "1 skill");
        assert_eq!(skill_count_label(3), "3 skills");
    }

    #[test]
    fn state_serializes_with_labels() {
        let state = FilterState::default()
            .with_query("a")
            .with_category(CategoryFilter::named("Cloud"))
            .with_view_mode(ViewMode::Cloud);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active_category"], "Cloud");
        assert_eq!(json["view_mode"], "cloud");

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
