//! CLI argument parsing using clap

use crate::config::CONFIG_NAME;
use clap::{Parser, Subcommand};

/// ESLint Summary CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "eslint-summary")]
#[command(about = "Summarize and compare the effective rules of ESLint configs as Markdown")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base name of the configuration file, looked up from the current directory upward
    #[arg(short, long, global = true, default_value = CONFIG_NAME)]
    pub config: String,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write one Markdown report per ESLint config
    Report,

    /// Compare the ESLint configs and write one document per plugin that differs
    Diff,
}

impl Cli {
    /// The command to run; `report` when none was given
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Report)
    }
}
