//! # naxsi-wl
//!
//! Parse, validate and explain naxsi `BasicRule` whitelists from the command line

mod bootstrap;
mod commands;
mod di;
mod report;

use clap::{Parser, Subcommand};
use naxsi_wl_domain::{CliOverrides, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "naxsi-wl")]
#[command(version)]
#[command(about = "Parse, validate and explain naxsi whitelists")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, global = true)]
    format: Option<OutputFormat>,

    /// naxsi rules file whose `id:` fragments count as existing rules
    #[arg(short = 'r', long, global = true)]
    rules_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse whitelists and print their canonical form
    Parse {
        #[arg(required = true)]
        whitelists: Vec<String>,
    },
    /// Parse whitelists and describe them in plain English
    Explain {
        #[arg(required = true)]
        whitelists: Vec<String>,
    },
    /// Check a file holding one whitelist per line
    CheckFile { path: PathBuf },
    /// Validate stored whitelist fields
    Validate(commands::ValidateArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level,
        output_format: cli.format,
        rules_file: cli.rules_file,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);

    let use_cases = di::UseCases::new(&config)?;

    let all_valid = match cli.command {
        Command::Parse { whitelists } => commands::parse(&use_cases, &whitelists)?,
        Command::Explain { whitelists } => commands::explain(&use_cases, &whitelists)?,
        Command::CheckFile { path } => commands::check_file(&use_cases, &path)?,
        Command::Validate(args) => commands::validate(&use_cases, args)?,
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
