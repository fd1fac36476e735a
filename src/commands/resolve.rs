//! `resolve`: look up a key in the active language's catalog.

use anyhow::{Result, bail};

use crate::{
    cli::{ExitStatus, ResolveCommand},
    resolve::{resolve, resolve_nested},
};

use super::shared::{load_catalogs, load_context, parse_params, select_language};

pub fn resolve_command(cmd: &ResolveCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let scan = load_catalogs(&ctx)?;
    let language = select_language(&cmd.common, &ctx)?;

    if cmd.save_language {
        ctx.store.save(language)?;
    }

    let Some(catalog) = scan.set.get(language) else {
        bail!(
            "No catalog for language '{}' in {}",
            language,
            ctx.locales_root.display()
        );
    };

    if cmd.nested {
        return match resolve_nested(catalog, &cmd.key) {
            Some(value) => {
                println!("{}", serde_json::to_string_pretty(&value.to_json())?);
                Ok(ExitStatus::Success)
            }
            None => {
                eprintln!("Key '{}' not found in '{}'", cmd.key, language);
                Ok(ExitStatus::Failure)
            }
        };
    }

    let params = parse_params(&cmd.params)?;
    let borrowed: Vec<(&str, crate::resolve::ParamValue)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.clone()))
        .collect();

    // A missing leaf degrades to the literal key (already logged); that is
    // rendered output, not a command failure.
    println!("{}", resolve(catalog, &cmd.key, &borrowed));
    Ok(ExitStatus::Success)
}
