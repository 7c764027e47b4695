//! skillfolio stats - Portfolio statistics

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::portfolio::Portfolio;

#[derive(Args, Debug)]
pub struct StatsArgs {}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PortfolioStats {
    pub source: String,
    pub total_skills: usize,
    pub categories: usize,
    pub projects: usize,
    pub featured: Vec<String>,
    pub starred: Vec<String>,
}

impl PortfolioStats {
    #[must_use]
    pub fn collect(portfolio: &Portfolio, source: String) -> Self {
        let mut starred = Vec::new();
        for category in portfolio.catalog.categories() {
            for skill in &category.skills {
                if portfolio.proficiency.is_starred(skill) && !starred.contains(skill) {
                    starred.push(skill.clone());
                }
            }
        }
        Self {
            source,
            total_skills: portfolio.catalog.total_skills(),
            categories: portfolio.catalog.len(),
            projects: portfolio.projects.len(),
            featured: portfolio.featured.clone(),
            starred,
        }
    }
}

pub fn run(ctx: &AppContext, _args: &StatsArgs) -> Result<()> {
    let stats = PortfolioStats::collect(&ctx.portfolio, ctx.data_source());

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(&stats)),
        OutputFormat::Plain => {
            println!("source\t{}", stats.source);
            println!("skills\t{}", stats.total_skills);
            println!("categories\t{}", stats.categories);
            println!("projects\t{}", stats.projects);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title("Portfolio");
            layout
                .kv("Data", &stats.source)
                .kv("Technical skills", &format!("{}+", stats.total_skills))
                .kv("Categories", &stats.categories.to_string())
                .kv("Projects", &stats.projects.to_string())
                .kv("Featured", &stats.featured.join(", "))
                .kv("Top proficiency", &stats.starred.join(", "));
            emit_human(layout);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_stats() {
        let stats = PortfolioStats::collect(&Portfolio::builtin(), "built-in".to_string());
        assert_eq!(stats.total_skills, 22);
        assert_eq!(stats.categories, 8);
        assert_eq!(stats.projects, 4);
        assert_eq!(stats.source, "built-in");
        assert_eq!(stats.featured[0], "Kubernetes");
        assert_eq!(
            stats.starred,
            vec!["Jenkins", "AWS", "Docker", "Kubernetes", "Bash", "Linux"]
        );
    }
}
