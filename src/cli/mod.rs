//! Terminal front end for the survey wizard.

mod commands;
pub mod core;
pub mod output;
mod prompts;
mod shell;
pub mod view;

pub use self::core::{CliError, CliMode, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
