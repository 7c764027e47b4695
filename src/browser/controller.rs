//! Filter state controller.
//!
//! Owns the [`FilterState`] and the derived view. Every mutator replaces one
//! field and recomputes the view before returning, so readers never observe a
//! stale result.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::portfolio::SkillCatalog;

use super::derive::{CloudEntry, VisibleCategory, derive_visible, flatten_cloud};
use super::state::{CategoryFilter, FilterState, ViewMode};

#[derive(Debug, Clone)]
pub struct SkillsBrowser {
    catalog: Arc<SkillCatalog>,
    state: FilterState,
    visible: Vec<VisibleCategory>,
    revision: u64,
}

impl SkillsBrowser {
    /// Start from the default state: empty query, `All`, cards.
    #[must_use]
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    #[must_use]
    pub fn with_state(catalog: Arc<SkillCatalog>, state: FilterState) -> Self {
        let visible = derive_visible(&catalog, &state);
        Self {
            catalog,
            state,
            visible,
            revision: 0,
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.state.search_query != query {
            self.state.search_query = query;
            self.refresh();
        }
    }

    pub fn set_active_category(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        if self.state.active_category != category {
            self.state.active_category = category;
            self.refresh();
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode != mode {
            self.state.view_mode = mode;
            // The grouped result does not depend on the view mode.
            self.bump("view_mode");
        }
    }

    /// Clear the query and go back to `All`. The view mode is kept.
    pub fn reset(&mut self) {
        let changed = !self.state.is_unfiltered();
        self.state.search_query.clear();
        self.state.active_category = CategoryFilter::All;
        if changed {
            self.refresh();
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.state.search_query.clone();
        query.push(c);
        self.set_search_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.state.search_query.clone();
        if query.pop().is_some() {
            self.set_search_query(query);
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.state.view_mode.toggle());
    }

    /// Move the category selection through `All` + catalog categories,
    /// wrapping at both ends. A stale selection restarts from `All`.
    pub fn cycle_category(&mut self, forward: bool) {
        let options = self.catalog.filter_options();
        let current = options
            .iter()
            .position(|option| *option == self.state.active_category);
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        if let Some(option) = options.into_iter().nth(next) {
            self.set_active_category(option);
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn visible(&self) -> &[VisibleCategory] {
        &self.visible
    }

    #[must_use]
    pub fn cloud(&self) -> Vec<CloudEntry> {
        flatten_cloud(&self.visible)
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    /// The "no results" state the renderer shows with a clear action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn visible_skill_count(&self) -> usize {
        self.visible.iter().map(|v| v.skills.len()).sum()
    }

    /// Bumped on every state change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn refresh(&mut self) {
        self.visible = derive_visible(&self.catalog, &self.state);
        self.bump("filters");
        debug!(
            target: "browser",
            query = %self.state.search_query,
            category = %self.state.active_category,
            categories = self.visible.len(),
            skills = self.visible_skill_count(),
            "filters changed"
        );
    }

    fn bump(&mut self, reason: &'static str) {
        self.revision += 1;
        trace!(target: "browser", revision = self.revision, reason, "state revision");
    }
}
