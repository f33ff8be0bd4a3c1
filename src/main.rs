//! ESLint Summary CLI entry point

use clap::Parser;
use eslint_summary::cli::{Cli, Command, common};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    common::install_panic_hook();

    let cli = Cli::parse();

    let exit_code = match cli.command() {
        Command::Report => eslint_summary::cli::report::run_report(&cli.config),
        Command::Diff => eslint_summary::cli::diff::run_diff(&cli.config),
    };

    process::exit(exit_code);
}
