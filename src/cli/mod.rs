//! Command-line interface definitions.

pub mod colors;
pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "skillfolio", version, about = "Browse a portfolio's skill matrix and projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON for machine consumers (same as --format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format: human, json, plain
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (overrides global and project config)
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Portfolio data file (defaults to the built-in data)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

impl Cli {
    /// `--robot` wins, then `--format`, then `robot.format` from config.
    #[must_use]
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.robot {
            return OutputFormat::Json;
        }
        if let Some(format) = self.format {
            return format;
        }
        config.robot.format
    }
}
