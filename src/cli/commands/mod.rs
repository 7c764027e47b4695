//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::{Args, Subcommand};

pub mod browse;
pub mod categories;
pub mod completions;
pub mod projects;
pub mod skills;
pub mod stats;

use crate::app::AppContext;
use crate::browser::{CategoryFilter, FilterState};
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse skills interactively
    Browse(browse::BrowseArgs),

    /// List skills matching a query and category
    Skills(skills::SkillsArgs),

    /// List skill categories with counts
    Categories(categories::CategoriesArgs),

    /// List projects, optionally filtered by technology
    Projects(projects::ProjectsArgs),

    /// Show portfolio statistics
    Stats(stats::StatsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Browse(args) => browse::run(ctx, args),
        Commands::Skills(args) => skills::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Projects(args) => projects::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Filter flags shared by `browse` and `skills`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring to match skill names against
    #[arg(long, short = 's')]
    pub query: Option<String>,

    /// Category name, or "All"
    #[arg(long, short)]
    pub category: Option<String>,

    /// View mode: cards or cloud
    #[arg(long)]
    pub view: Option<String>,
}

impl FilterArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn to_state(&self, ctx: &AppContext) -> Result<FilterState> {
        let mut state = ctx.default_filter_state();
        if let Some(query) = &self.query {
            state.search_query.clone_from(query);
        }
        if let Some(category) = &self.category {
            state.active_category = CategoryFilter::parse(category);
        }
        if let Some(view) = &self.view {
            state.view_mode = view.parse()?;
        }
        Ok(state)
    }
}
