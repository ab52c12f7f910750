//! sitecheck - static site integrity checker.
//!
//! Verifies that a site root carries an index file and that every quoted
//! absolute-path literal in its markup, stylesheets and scripts points at a
//! file under `public/` or the root itself.

mod cli;
mod config;
mod core;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, check::run_checks};
use config::CheckConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.command.args().verbose);

    let config = CheckConfig::load(&cli)?;
    run_checks(&config)
}
