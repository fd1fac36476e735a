//! Context loading shared by all commands: config discovery, locale scan,
//! and active-language selection.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::{
    catalog::CatalogScan,
    catalog::CatalogSet,
    cli::CommonArgs,
    config::{Config, load_config},
    language::{Language, PreferenceStore, detect_from_env},
};

/// Everything a command needs before touching catalogs.
pub struct CommandContext {
    pub config: Config,
    pub locales_root: PathBuf,
    pub store: PreferenceStore,
}

/// Discover config from the current directory and apply CLI overrides.
pub fn load_context(common: &CommonArgs) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(&cwd)?;
    let locales_root = common
        .locales_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&loaded.config.locales_root));
    let store = PreferenceStore::new(PathBuf::from(&loaded.config.state_file));
    Ok(CommandContext {
        config: loaded.config,
        locales_root,
        store,
    })
}

/// Scan the locales directory for catalogs.
pub fn load_catalogs(ctx: &CommandContext) -> Result<CatalogScan> {
    CatalogSet::load_dir(&ctx.locales_root)
}

/// Pick the language to operate in.
///
/// An explicit `--language` must be a supported code (a typo on the command
/// line is an error, unlike a corrupted preference file, which is silently
/// ignored). Otherwise: persisted preference, then locale environment, then
/// the configured default.
pub fn select_language(common: &CommonArgs, ctx: &CommandContext) -> Result<Language> {
    if let Some(code) = &common.language {
        return match Language::from_code(code) {
            Some(language) => Ok(language),
            None => bail!(
                "Unsupported language code: \"{}\" (supported: {})",
                code,
                Language::all()
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
    }
    Ok(ctx
        .store
        .load()
        .or_else(detect_from_env)
        .unwrap_or_else(|| ctx.config.default_language()))
}

/// Parse repeated `--param name=value` arguments.
///
/// Integer values become numeric params; everything else is text.
pub fn parse_params(raw: &[String]) -> Result<Vec<(String, crate::resolve::ParamValue)>> {
    use crate::resolve::ParamValue;

    let mut params = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some((name, value)) = entry.split_once('=') else {
            bail!("Invalid --param \"{}\": expected NAME=VALUE", entry);
        };
        if name.is_empty() {
            bail!("Invalid --param \"{}\": empty name", entry);
        }
        let value = match value.parse::<i64>() {
            Ok(n) => ParamValue::Number(n),
            Err(_) => ParamValue::Text(value.to_string()),
        };
        params.push((name.to_string(), value));
    }
    Ok(params)
}
