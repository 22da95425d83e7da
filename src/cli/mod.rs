//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command, and maps the outcome to an
//! [`ExitStatus`]. Kept separate from the analysis so locguard can be used
//! as a library.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init, repair::repair};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Repair(cmd)) => repair(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
