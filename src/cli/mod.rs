//! Command-line interface module.

mod args;
pub mod check;

pub use args::{CheckArgs, Cli, Commands};
