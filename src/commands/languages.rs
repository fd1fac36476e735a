//! `languages`: list supported languages and the active one.

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::{ExitStatus, LanguagesCommand},
    language::Language,
};

use super::shared::{load_catalogs, load_context, select_language};

pub fn languages(cmd: &LanguagesCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let active = select_language(&cmd.common, &ctx)?;

    // Missing locales directory just means no catalog annotations.
    let loaded = load_catalogs(&ctx).ok();

    for language in Language::all() {
        let marker = if *language == active { "*" } else { " " };
        let mut line = format!("{} {}  {}", marker, language.code(), language.name());
        if let Some(scan) = &loaded
            && scan.set.get(*language).is_none()
        {
            line = format!("{}  {}", line, "(no catalog)".dimmed());
        }
        println!("{line}");
    }
    Ok(ExitStatus::Success)
}
