use anyhow::Result;

pub use args::{
    Arguments, CheckCommand, Command, CommonArgs, LanguagesCommand, PlayCommand, ResolveCommand,
};
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args, verbose)
}
