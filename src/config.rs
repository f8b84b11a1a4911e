//! Command-line options and runtime configuration
//!
//! Running with no arguments gives the standard interactive machine. The
//! flags only change presentation and diagnostics, never machine behavior.

use clap::Parser;
use log::LevelFilter;
use std::io::IsTerminal;

#[derive(Parser, Debug)]
#[command(name = "vendo", version, about = "A terminal vending machine with a 3x3 slot grid")]
pub struct Cli {
    #[arg(long, help = "Do not clear the screen or use colors (for piped sessions)")]
    pub plain: bool,

    #[arg(long, help = "Keep clearing the screen but print without colors")]
    pub no_color: bool,

    #[arg(
        long,
        help = "Log filter written to stderr (off, error, warn, info, debug, trace); overrides RUST_LOG"
    )]
    pub log_level: Option<LevelFilter>,
}

/// Presentation settings for the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit a clear-screen sequence before each render
    pub clear_screen: bool,
    /// Wrap messages and grid cells in color sequences
    pub color: bool,
}

impl Config {
    /// Exact text output: no screen clearing, no colors
    pub fn plain() -> Self {
        Config {
            clear_screen: false,
            color: false,
        }
    }

    /// Build the configuration for a run, given whether stdout is a terminal
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool) -> Self {
        if cli.plain {
            return Config::plain();
        }
        Config {
            clear_screen: true,
            color: !cli.no_color && stdout_is_tty,
        }
    }

    /// Build the configuration for the process's own stdout
    pub fn detect(cli: &Cli) -> Self {
        Config::from_cli(cli, std::io::stdout().is_terminal())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clear_screen: true,
            color: true,
        }
    }
}
