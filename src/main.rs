//! skillfolio - Browse a categorized portfolio of technical skills

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillfolio::Result;
use skillfolio::app::AppContext;
use skillfolio::cli::output::{emit_robot, robot_error};
use skillfolio::cli::{Cli, Commands, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if wants_json_errors(&cli) {
                // Robot mode: error envelope on stdout
                let response = robot_error(e.code(), e.to_string());
                if emit_robot(&response).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return skillfolio::cli::commands::completions::run(args);
    }
    let ctx = AppContext::from_cli(cli)?;
    skillfolio::cli::commands::run(&ctx, &cli.command)
}

/// Errors are JSON when the caller asked for JSON on the command line.
fn wants_json_errors(cli: &Cli) -> bool {
    cli.robot || cli.format == Some(OutputFormat::Json)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }
    // Log lines would tear the alternate screen; only log there on request.
    if matches!(cli.command, Commands::Browse(_)) && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
