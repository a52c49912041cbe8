//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "pocket-cube", version, about = "2x2x2 pocket cube in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print colour letters instead of coloured blocks
    #[arg(long, global = true)]
    pub plain: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn a cube interactively
    Play,
    /// Print solved cubes
    New {
        /// How many cubes to print side by side
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        count: u16,
    },
    /// Print a cube once, optionally after applying moves (e.g. R U "R'")
    Print {
        moves: Vec<String>,
    },
    /// Load a saved cube (not implemented)
    Load,
    /// Scramble a cube (not implemented)
    Scramble,
    /// Solve a cube (not implemented)
    Solve,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level {s:?} (expected off, error, warn, info, debug or trace)"))
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::New { .. } => "new",
            Command::Print { .. } => "print",
            Command::Load => "load",
            Command::Scramble => "scramble",
            Command::Solve => "solve",
        }
    }

    /// True for subcommands that take over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        let err = Cli::try_parse_from(["pocket-cube"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let err = Cli::try_parse_from(["pocket-cube", "explode"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn parses_every_subcommand() {
        for (arg, name) in [
            ("play", "play"),
            ("new", "new"),
            ("print", "print"),
            ("load", "load"),
            ("scramble", "scramble"),
            ("solve", "solve"),
        ] {
            let cli = Cli::try_parse_from(["pocket-cube", arg]).unwrap();
            assert_eq!(cli.command.name(), name);
        }
    }

    #[test]
    fn print_collects_moves_and_global_flags() {
        let cli =
            Cli::try_parse_from(["pocket-cube", "print", "R", "U'", "--plain", "--log-level", "debug"])
                .unwrap();
        assert_eq!(
            cli.command,
            Command::Print {
                moves: vec!["R".to_string(), "U'".to_string()]
            }
        );
        assert!(cli.plain);
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn new_count_defaults_to_one_and_is_bounded() {
        let cli = Cli::try_parse_from(["pocket-cube", "new"]).unwrap();
        assert_eq!(cli.command, Command::New { count: 1 });
        assert!(Cli::try_parse_from(["pocket-cube", "new", "0"]).is_err());
        assert!(Cli::try_parse_from(["pocket-cube", "new", "--log-level", "loud"]).is_err());
    }
}
