//! Criterion benchmarks for skill derivation.
//!
//! Every keystroke in the browser re-derives the visible set, so derivation
//! over a realistic catalog should stay well under a frame (16ms).

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use skillfolio::browser::{
    CategoryFilter, FilterState, SkillsBrowser, ViewMode, derive_visible, flatten_cloud,
};
use skillfolio::portfolio::{Portfolio, SkillCatalog, SkillCategory};

/// 40 categories of 25 skills each.
fn large_catalog() -> SkillCatalog {
    let categories = (0..40)
        .map(|c| {
            SkillCategory::new(
                format!("Category {c}"),
                "code",
                (0..25).map(|s| format!("Skill {c}-{s}")),
            )
        })
        .collect();
    SkillCatalog::new(categories).unwrap()
}

fn derive_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let builtin = Portfolio::builtin().catalog;
    let large = large_catalog();

    let unfiltered = FilterState::default();
    let query = FilterState::default().with_query("er");
    let narrowed = FilterState::default()
        .with_query("skill 3")
        .with_category(CategoryFilter::named("Category 7"));

    group.bench_function("builtin_unfiltered", |b| {
        b.iter(|| derive_visible(black_box(&builtin), black_box(&unfiltered)));
    });
    group.bench_function("builtin_query", |b| {
        b.iter(|| derive_visible(black_box(&builtin), black_box(&query)));
    });
    group.bench_function("large_query", |b| {
        b.iter(|| derive_visible(black_box(&large), black_box(&query)));
    });
    group.bench_function("large_category_and_query", |b| {
        b.iter(|| derive_visible(black_box(&large), black_box(&narrowed)));
    });
    group.bench_function("large_flatten_cloud", |b| {
        let visible = derive_visible(&large, &unfiltered);
        b.iter(|| flatten_cloud(black_box(&visible)));
    });

    group.finish();
}

fn controller_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    let catalog = Arc::new(large_catalog());

    group.bench_function("type_query", |b| {
        b.iter(|| {
            let mut browser = SkillsBrowser::new(Arc::clone(&catalog));
            for ch in "skill 12-".chars() {
                browser.push_query_char(black_box(ch));
            }
            browser.set_view_mode(ViewMode::Cloud);
            browser.cloud().len()
        });
    });

    group.finish();
}

criterion_group!(benches, derive_benchmarks, controller_benchmarks);
criterion_main!(benches);
