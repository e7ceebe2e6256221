//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Lectern using clap.

pub mod commands;

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};

/// Lectern - lesson-plan library and fixed-layout DOCX export
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(version, about, long_about = None)]
#[command(author = "Lectern Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "LECTERN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LECTERN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records in the library
    List(commands::list::ListArgs),

    /// Copy JSON files into the library
    Import(commands::import::ImportArgs),

    /// Print a record in canonical form
    Show(commands::show::ShowArgs),

    /// Replace a record with edited JSON text
    Save(commands::save::SaveArgs),

    /// Render one record (or unsaved JSON text) to DOCX
    Export(commands::export::ExportArgs),

    /// Bundle several records into one ZIP archive
    Bundle(commands::bundle::BundleArgs),

    /// Edit the activities of a record
    Activity(commands::activity::ActivityArgs),

    /// List local print queues
    Printers(commands::printers::PrintersArgs),

    /// Send files to a print queue
    Print(commands::print::PrintArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::activity::ActivityAction;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["lectern", "list"]);
        assert_eq!(cli.config, "lectern.toml");
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["lectern", "--config", "custom.toml", "list"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["lectern", "--log-level", "debug", "list"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_bundle() {
        let cli = Cli::parse_from(["lectern", "bundle", "a.json", "b.json", "--format", "json"]);
        match cli.command {
            Commands::Bundle(args) => {
                assert_eq!(args.names, vec!["a.json", "b.json"]);
                assert_eq!(args.format, "json");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_activity_move() {
        let cli = Cli::parse_from([
            "lectern", "activity", "move", "a.json", "--section", "2", "--index", "3",
            "--direction", "up",
        ]);
        match cli.command {
            Commands::Activity(args) => match args.action {
                ActivityAction::Move(m) => {
                    assert_eq!(m.target.name, "a.json");
                    assert_eq!(m.target.section, 2);
                    assert_eq!(m.index, 3);
                    assert_eq!(m.direction, "up");
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_from_text() {
        let cli = Cli::parse_from(["lectern", "export", "--text-file", "-", "--name", "x.json"]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.name.is_none());
                assert_eq!(args.text_file.as_deref(), Some("-"));
                assert_eq!(args.hint.as_deref(), Some("x.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["lectern", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["lectern", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
