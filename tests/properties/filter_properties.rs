use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use skillfolio::browser::{
    CategoryFilter, FilterState, SkillsBrowser, ViewMode, derive_visible, flatten_cloud,
};
use skillfolio::portfolio::{SkillCatalog, SkillCategory};

fn catalog_strategy() -> impl Strategy<Value = SkillCatalog> {
    prop::collection::vec(
        prop::collection::btree_set("[A-Za-z][A-Za-z ]{0,7}", 1..6),
        1..5,
    )
    .prop_map(|groups: Vec<BTreeSet<String>>| {
        let categories = groups
            .into_iter()
            .enumerate()
            .map(|(i, skills)| SkillCategory::new(format!("Cat{i}"), "code", skills))
            .collect();
        SkillCatalog::new(categories).unwrap()
    })
}

/// Index past the last category means `All`; one further is an unknown name.
fn category_for(catalog: &SkillCatalog, pick: usize) -> CategoryFilter {
    let pick = pick % (catalog.len() + 2);
    match pick.checked_sub(catalog.len()) {
        None => CategoryFilter::named(catalog.categories()[pick].name.clone()),
        Some(0) => CategoryFilter::All,
        Some(_) => CategoryFilter::named("Missing"),
    }
}

fn state_strategy() -> impl Strategy<Value = (String, usize, bool)> {
    ("[a-zA-Z ]{0,3}", 0usize..16, any::<bool>())
}

fn build_state(catalog: &SkillCatalog, (query, pick, cloud): (String, usize, bool)) -> FilterState {
    let view = if cloud { ViewMode::Cloud } else { ViewMode::Cards };
    FilterState::default()
        .with_query(query)
        .with_category(category_for(catalog, pick))
        .with_view_mode(view)
}

proptest! {
    #[test]
    fn test_output_is_subset_of_catalog(catalog in catalog_strategy(), raw in state_strategy()) {
        let state = build_state(&catalog, raw);
        for group in derive_visible(&catalog, &state) {
            let source = catalog.get(&group.category);
            prop_assert!(source.is_some());
            let source = source.unwrap();
            prop_assert_eq!(&group.icon, &source.icon);
            for skill in &group.skills {
                prop_assert!(catalog.contains_skill(&group.category, skill));
            }
        }
    }

    #[test]
    fn test_search_matches_case_insensitive_substring(
        catalog in catalog_strategy(),
        raw in state_strategy(),
    ) {
        let state = build_state(&catalog, raw);
        let visible = derive_visible(&catalog, &state);
        let needle = state.search_query.to_lowercase();

        for category in catalog.categories() {
            let admitted = state.active_category.admits(&category.name);
            let shown = visible.iter().find(|g| g.category == category.name);
            for skill in &category.skills {
                let expected = admitted && skill.to_lowercase().contains(&needle);
                let present = shown.is_some_and(|g| g.skills.contains(skill));
                prop_assert_eq!(present, expected, "skill {} query {:?}", skill, needle);
            }
        }
        for group in &visible {
            prop_assert!(!group.skills.is_empty());
        }
    }

    #[test]
    fn test_named_category_is_exclusive(catalog in catalog_strategy(), raw in state_strategy()) {
        let state = build_state(&catalog, raw);
        let visible = derive_visible(&catalog, &state);
        if let CategoryFilter::Named(name) = &state.active_category {
            prop_assert!(visible.len() <= 1);
            if let Some(group) = visible.first() {
                prop_assert_eq!(&group.category, name);
            }
            let has_match = catalog.get(name).is_some_and(|c| {
                c.skills
                    .iter()
                    .any(|s| s.to_lowercase().contains(&state.search_query.to_lowercase()))
            });
            prop_assert_eq!(visible.len() == 1, has_match);
        }
    }

    #[test]
    fn test_cloud_order_is_catalog_order(catalog in catalog_strategy(), raw in state_strategy()) {
        let state = build_state(&catalog, raw);
        let visible = derive_visible(&catalog, &state);
        let cloud: Vec<(String, String)> = flatten_cloud(&visible)
            .into_iter()
            .map(|e| (e.category, e.skill))
            .collect();

        let expected: Vec<(String, String)> = catalog
            .categories()
            .iter()
            .filter_map(|c| visible.iter().find(|g| g.category == c.name))
            .flat_map(|g| g.skills.iter().map(|s| (g.category.clone(), s.clone())))
            .collect();
        prop_assert_eq!(cloud, expected);
    }

    #[test]
    fn test_reset_matches_default_derivation(
        catalog in catalog_strategy(),
        steps in prop::collection::vec(state_strategy(), 0..6),
    ) {
        let catalog = Arc::new(catalog);
        let mut browser = SkillsBrowser::new(Arc::clone(&catalog));
        for raw in steps {
            let state = build_state(&catalog, raw);
            browser.set_search_query(state.search_query);
            browser.set_active_category(state.active_category);
            browser.set_view_mode(state.view_mode);
        }
        browser.reset();
        let expected = derive_visible(&catalog, &FilterState::default());
        prop_assert_eq!(browser.visible(), expected.as_slice());

        // Twice is the same as once.
        let once = browser.visible().to_vec();
        browser.reset();
        prop_assert_eq!(browser.visible(), once.as_slice());
    }
}
