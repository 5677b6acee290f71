//! Command-line front end for the product status service.
//!
//! Argument parsing lives in [`args`]; [`commands`] turns a parsed command into
//! adapter/facade calls and renders the result lines.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::{CommandError, CommandRunner};
