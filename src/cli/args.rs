//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare every locale catalog against the default language
//! - `resolve`: Resolve a translation key, with optional interpolation
//! - `play`: Type a reveal sequence from the catalog into the terminal
//! - `languages`: List supported languages and the active one
//! - `init`: Initialize a marquee configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Play(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locales directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Language code to operate in (overrides persisted preference)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Dotted translation key (e.g. "services.strategicPlanning.name")
    pub key: String,

    /// Interpolation parameter as name=value
    /// Can be specified multiple times: --param year=2024 --param name=Corp
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Print the raw subtree as JSON instead of a leaf string
    #[arg(long)]
    pub nested: bool,

    /// Persist the chosen language for subsequent runs
    #[arg(long)]
    pub save_language: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PlayCommand {
    /// Key of a catalog node with title/description/stats/cta entries
    pub key: String,

    /// Milliseconds between characters for the title stage
    #[arg(long, default_value_t = 45)]
    pub char_interval: u64,

    /// Milliseconds of pause between stages
    #[arg(long, default_value_t = 350)]
    pub stage_delay: u64,

    /// Print the final frame immediately instead of animating
    #[arg(long)]
    pub no_delay: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every locale catalog matches the default language's keys
    Check(CheckCommand),
    /// Resolve a translation key in the active language
    Resolve(ResolveCommand),
    /// Play a sequential text reveal from the catalog in the terminal
    Play(PlayCommand),
    /// List supported languages, marking the active one
    Languages(LanguagesCommand),
    /// Initialize a new .marqueerc.json configuration file
    Init,
}
