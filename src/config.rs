//! Runtime configuration resolved once from the command line.
//!
//! There is no config file; everything comes from flags and from whether
//! stdout is a terminal.

use std::path::PathBuf;

use log::LevelFilter;

use crate::cli::Cli;
use crate::types::DisplayMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayMode,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayMode::default(),
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    /// Colour output needs both a terminal and no `--plain`.
    pub fn from_cli(cli: &Cli, stdout_is_terminal: bool) -> Self {
        let display = if cli.plain || !stdout_is_terminal {
            DisplayMode::Plain
        } else {
            DisplayMode::Color
        };
        Self {
            display,
            log_level: cli.log_level,
            log_file: cli.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pocket-cube").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn colour_only_on_a_terminal() {
        let cli = parse(&["print"]);
        assert_eq!(Config::from_cli(&cli, true).display, DisplayMode::Color);
        assert_eq!(Config::from_cli(&cli, false).display, DisplayMode::Plain);
    }

    #[test]
    fn plain_flag_wins() {
        let cli = parse(&["--plain", "print"]);
        assert_eq!(Config::from_cli(&cli, true).display, DisplayMode::Plain);
    }

    #[test]
    fn log_settings_are_carried_over() {
        let cli = parse(&["play", "--log-level", "trace", "--log-file", "cube.log"]);
        let config = Config::from_cli(&cli, true);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.log_file, Some(PathBuf::from("cube.log")));
    }
}
