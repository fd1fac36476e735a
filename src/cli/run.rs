//! Command dispatch.

use anyhow::Result;

use crate::commands::{check::check, init::init, languages::languages, play::play,
    resolve::resolve_command};

use super::{
    args::{Arguments, Command},
    exit_status::ExitStatus,
    report,
};

pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => {
            let outcome = check(&cmd)?;
            report::print(&outcome, verbose);
            if outcome.error_count() > 0 {
                Ok(ExitStatus::Failure)
            } else {
                Ok(ExitStatus::Success)
            }
        }
        Some(Command::Resolve(cmd)) => resolve_command(&cmd),
        Some(Command::Play(cmd)) => play(&cmd),
        Some(Command::Languages(cmd)) => languages(&cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
