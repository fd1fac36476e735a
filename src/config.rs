use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::language::Language;

pub const CONFIG_FILE_NAME: &str = ".marqueerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<code>.json` catalog per language.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Language whose catalog is the reference for `check` and the final
    /// fallback for language detection.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Key-value file persisting the chosen language.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_state_file() -> String {
    ".marquee-state.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            default_language: default_language(),
            state_file: default_state_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `defaultLanguage` is not a supported code.
    pub fn validate(&self) -> Result<()> {
        if Language::from_code(&self.default_language).is_none() {
            anyhow::bail!(
                "Unsupported 'defaultLanguage': \"{}\" (supported: {})",
                self.default_language,
                Language::all()
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Ok(())
    }

    /// The validated default language.
    pub fn default_language(&self) -> Language {
        Language::from_code(&self.default_language).unwrap_or_default()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
