//! skillfolio projects - List projects with the technology filter

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::colors::{ColorSupport, FolioStyles};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::portfolio::{Project, TechFilter, filter_projects, tech_filters};

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Only show projects using this technology ("all" for every project)
    #[arg(long, short)]
    pub tech: Option<String>,

    /// Number of technology filters to offer (overrides config)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ProjectsReport<'a> {
    filter: String,
    filters: Vec<String>,
    count: usize,
    projects: Vec<&'a Project>,
}

pub fn run(ctx: &AppContext, args: &ProjectsArgs) -> Result<()> {
    let projects = &ctx.portfolio.projects;
    let limit = args.limit.unwrap_or(ctx.config.projects.tech_filter_limit);
    let filter = args
        .tech
        .as_deref()
        .map(TechFilter::parse)
        .unwrap_or_default();

    let filters: Vec<String> = std::iter::once(TechFilter::All.label().to_string())
        .chain(tech_filters(projects, limit))
        .collect();
    let shown = filter_projects(projects, &filter);

    debug!(target: "projects", filter = %filter, shown = shown.len(), "projects filtered");

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(ProjectsReport {
            filter: filter.to_string(),
            filters,
            count: shown.len(),
            projects: shown,
        })),
        OutputFormat::Plain => {
            for project in &shown {
                println!("{}\t{}", project.title, project.tech.join(","));
            }
            Ok(())
        }
        OutputFormat::Human => {
            let support = ColorSupport::detect();
            let mut layout = HumanLayout::new();
            layout.title("Projects");
            layout.kv("Filters", &filters.join(" | "));
            layout.blank();

            if shown.is_empty() {
                layout.push_line(format!("No projects found with \"{filter}\""));
            }
            for project in &shown {
                layout.section(&project.title);
                if !project.description.is_empty() {
                    layout.push_line(project.description.clone());
                }
                layout.kv("Tech", &project.tech.join(", "));
                for metric in &project.metrics {
                    layout.bullet(metric);
                }
                if let Some(repository) = &project.repository {
                    layout.kv("Repository", &FolioStyles::muted(repository, support));
                }
                layout.blank();
            }
            emit_human(layout);
            Ok(())
        }
    }
}
