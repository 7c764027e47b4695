//! skillfolio categories - List skill categories

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::browser::CategoryFilter;
use crate::cli::colors::{ColorSupport, FolioStyles};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::portfolio::{IconRef, SkillCatalog};

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Include the "All" pseudo-category
    #[arg(long)]
    pub with_all: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub icon: String,
    pub skills: usize,
}

#[must_use]
pub fn entries(catalog: &SkillCatalog, with_all: bool) -> Vec<CategoryEntry> {
    let all = with_all.then(|| CategoryEntry {
        name: CategoryFilter::ALL.to_string(),
        icon: String::new(),
        skills: catalog.total_skills(),
    });
    all.into_iter()
        .chain(catalog.categories().iter().map(|c| CategoryEntry {
            name: c.name.clone(),
            icon: c.icon.to_string(),
            skills: c.skills.len(),
        }))
        .collect()
}

pub fn run(ctx: &AppContext, args: &CategoriesArgs) -> Result<()> {
    let entries = entries(&ctx.catalog, args.with_all);

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(serde_json::json!({
            "count": entries.len(),
            "categories": entries,
        }))),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}\t{}", entry.name, entry.skills);
            }
            Ok(())
        }
        OutputFormat::Human => {
            let support = ColorSupport::detect();
            let icons = ctx.icons();
            let mut layout = HumanLayout::new();
            layout.title("Categories");
            for entry in &entries {
                let label = if entry.icon.is_empty() {
                    entry.name.clone()
                } else {
                    format!("{} {}", icons.resolve(&IconRef::new(&entry.icon)), entry.name)
                };
                layout.kv(
                    &label,
                    &FolioStyles::muted(&entry.skills.to_string(), support),
                );
            }
            emit_human(layout);
            Ok(())
        }
    }
}
