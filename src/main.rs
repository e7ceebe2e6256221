// Lectern - Lesson-plan library and fixed-layout DOCX export
// Copyright (c) 2025 Lectern Contributors
// Licensed under the MIT License

use clap::Parser;
use lectern::cli::commands::{load_settings, EXIT_FATAL};
use lectern::cli::{Cli, Commands};
use lectern::config::LoggingConfig;
use lectern::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken config file is reported by the command itself; logging
    // falls back to console-only output until then.
    let (config_level, logging_config) = match load_settings(&cli.config) {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };
    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "warn".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Lectern - Lesson-plan library and DOCX export"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::List(args) => args.execute(&cli.config),
        Commands::Import(args) => args.execute(&cli.config),
        Commands::Show(args) => args.execute(&cli.config),
        Commands::Save(args) => args.execute(&cli.config),
        Commands::Export(args) => args.execute(&cli.config),
        Commands::Bundle(args) => args.execute(&cli.config),
        Commands::Activity(args) => args.execute(&cli.config),
        Commands::Printers(args) => args.execute(&cli.config),
        Commands::Print(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
