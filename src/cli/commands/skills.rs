//! skillfolio skills - One-shot skill listing
//!
//! Runs the same derivation as the interactive browser and prints the grouped
//! (cards) or flat (cloud) result.

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::browser::{
    CategoryFilter, CloudEntry, ColorBand, FilterState, IconProvider, ProficiencyTable, SkillsBrowser,
    ViewMode, VisibleCategory, empty_state_message, skill_count_label,
};
use crate::cli::colors::{ColorSupport, FolioStyles};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;

use super::FilterArgs;

#[derive(Args, Debug)]
pub struct SkillsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(ctx: &AppContext, args: &SkillsArgs) -> Result<()> {
    let state = args.filter.to_state(ctx)?;
    let browser = ctx.browser(state);

    debug!(
        target: "skills",
        query = %browser.state().search_query,
        category = %browser.state().active_category,
        view = %browser.view_mode(),
        shown = browser.visible_skill_count(),
        "skills derived"
    );

    match ctx.output_format {
        OutputFormat::Json => {
            let mut response = robot_ok(SkillsReport::new(&browser, &ctx.portfolio.proficiency));
            if let Some(warning) = unknown_category_warning(&browser) {
                response = response.with_warning(warning);
            }
            emit_robot(&response)
        }
        OutputFormat::Plain => {
            print!("{}", render_plain(&browser));
            Ok(())
        }
        OutputFormat::Human => {
            let support = ColorSupport::detect();
            let icons = ctx.icons();
            emit_human(render_human(
                &browser,
                &ctx.portfolio.proficiency,
                icons.as_ref(),
                support,
            ));
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsReport {
    pub filters: FilterState,
    pub view: ViewMode,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<VisibleCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<CloudSkill>>,
}

#[derive(Debug, Serialize)]
pub struct CloudSkill {
    #[serde(flatten)]
    pub entry: CloudEntry,
    pub level: u8,
    pub size: f32,
    pub band: ColorBand,
}

impl SkillsReport {
    #[must_use]
    pub fn new(browser: &SkillsBrowser, proficiency: &ProficiencyTable) -> Self {
        let (categories, skills) = match browser.view_mode() {
            ViewMode::Cards => (Some(browser.visible().to_vec()), None),
            ViewMode::Cloud => (
                None,
                Some(
                    browser
                        .cloud()
                        .into_iter()
                        .map(|entry| CloudSkill {
                            level: proficiency.level_for(&entry.skill),
                            size: proficiency.size_for(&entry.skill),
                            band: proficiency.color_band(&entry.skill),
                            entry,
                        })
                        .collect(),
                ),
            ),
        };
        Self {
            filters: browser.state().clone(),
            view: browser.view_mode(),
            count: browser.visible_skill_count(),
            categories,
            skills,
        }
    }
}

/// `CATEGORY<TAB>SKILL`, one line per visible skill, no header.
#[must_use]
pub fn render_plain(browser: &SkillsBrowser) -> String {
    browser
        .cloud()
        .iter()
        .map(|entry| format!("{}\t{}\n", entry.category, entry.skill))
        .collect()
}

#[must_use]
pub fn render_human(
    browser: &SkillsBrowser,
    proficiency: &ProficiencyTable,
    icons: &dyn IconProvider,
    support: ColorSupport,
) -> HumanLayout {
    let mut layout = HumanLayout::new();

    if browser.is_empty() {
        layout.push_line(empty_state_message(browser.state()));
        layout.push_line(FolioStyles::muted(
            "Clear the search with: skillfolio skills",
            support,
        ));
        return layout;
    }

    match browser.view_mode() {
        ViewMode::Cards => {
            for group in browser.visible() {
                let header = format!("{} {}", icons.resolve(&group.icon), group.category);
                layout.push_line(format!(
                    "{} {}",
                    FolioStyles::heading(&header, support),
                    FolioStyles::muted(&skill_count_label(group.skills.len()), support)
                ));
                for skill in &group.skills {
                    if proficiency.is_starred(skill) {
                        layout.bullet(&format!("{skill} {}", FolioStyles::star(support)));
                    } else {
                        layout.bullet(skill);
                    }
                }
                layout.blank();
            }
        }
        ViewMode::Cloud => {
            let words: Vec<String> = browser
                .cloud()
                .iter()
                .map(|entry| {
                    FolioStyles::band(&entry.skill, proficiency.color_band(&entry.skill), support)
                })
                .collect();
            layout.push_line(words.join("  "));
        }
    }

    layout.push_line(FolioStyles::muted(
        &format!(
            "{} of {} skills shown",
            browser.visible_skill_count(),
            browser.catalog().total_skills()
        ),
        support,
    ));
    layout
}

/// A named category that is not in the catalog filters everything out.
#[must_use]
pub fn unknown_category_warning(browser: &SkillsBrowser) -> Option<String> {
    match &browser.state().active_category {
        CategoryFilter::Named(name) if browser.catalog().get(name).is_none() => {
            Some(format!("unknown category \"{name}\""))
        }
        _ => None,
    }
}
