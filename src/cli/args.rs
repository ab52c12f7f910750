//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Static site integrity checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, relative to ROOT (default: sitecheck.toml if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run every enabled check
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,

        /// Check that the index file exists at the root
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
        index: Option<bool>,

        /// Check that absolute asset references resolve
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
        assets: Option<bool>,
    },

    /// Check only that the index file exists
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Check only absolute asset references
    #[command(visible_alias = "a")]
    Assets {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Arguments shared by every check command.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Project root directory
    #[arg(value_name = "ROOT", default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Treat check failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    /// Shared arguments of the selected command.
    pub const fn args(&self) -> &CheckArgs {
        match self {
            Self::Check { args, .. } | Self::Index { args } | Self::Assets { args } => args,
        }
    }
}
