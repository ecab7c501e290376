//! lvd CLI - command-line front end for the lvd crates
//!
//! - Build partial orders and print their Hasse diagrams as tables, JSON or
//!   Graphviz DOT
//! - Inspect the float semantic-subtype lattice and its operator results
//! - Evaluate float expressions with checked operand and result classes

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use lvd_log::LogConfig;

mod commands;
mod error;
mod output;

use commands::{lattice, poset};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// lvd CLI application
#[derive(Parser)]
#[command(name = "lvd")]
#[command(about = "lvd - semantic subtypes and partial orders", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json, dot)
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Build and print partial orders
    Poset {
        #[command(subcommand)]
        command: poset::PosetCommands,
    },

    /// Inspect and evaluate the float lattice
    Lattice {
        #[command(subcommand)]
        command: lattice::LatticeCommands,
    },
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // An embedding process may already own the global subscriber.
    let _ = lvd_log::init_tracing(cli.verbose);

    let log_config = if cli.no_color {
        colored::control::set_override(false);
        LogConfig::plain()
    } else {
        LogConfig::default()
    };

    match cli.command {
        Commands::Poset { command } => poset::execute(command, cli.output),
        Commands::Lattice { command } => lattice::execute(command, cli.output, &log_config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["lvd", "lattice", "classes", "-o", "json", "--no-color"])
            .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.no_color);
    }

    #[test]
    fn negative_operands_parse() {
        let cli =
            Cli::try_parse_from(["lvd", "lattice", "eval", "Neg", "-2.5", "-", "Pos", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Lattice {
                command: lattice::LatticeCommands::Eval { lhs, .. }
            } if lhs == -2.5
        ));
    }
}
