//! Supported languages, preference persistence, and active-language state.
//!
//! The active language is resolved in three steps: the persisted preference
//! file, then the process locale environment, then the fixed default (`en`).
//! Unsupported codes are never an error; they are logged at debug level and
//! the previous (or default) language is kept.

use std::{collections::BTreeMap, fmt, fs, path::PathBuf};

use anyhow::{Context, Result};

/// Storage key under which the chosen language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// A supported display language.
///
/// The set is closed: catalogs exist per language and the rest of the crate
/// treats anything outside this enum as an ignorable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    English,
    Bulgarian,
}

impl Language {
    /// All supported languages, in display order.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Bulgarian]
    }

    /// ISO 639-1 code, as used in locale file names and the preference file.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bulgarian => "bg",
        }
    }

    /// Native display name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bulgarian => "Български",
        }
    }

    /// Parse a bare language code. Case-insensitive; no region subtags.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "bg" => Some(Language::Bulgarian),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Extract the primary language subtag from a locale tag.
///
/// Accepts full POSIX locale strings and BCP 47 tags:
/// `bg_BG.UTF-8` -> `bg`, `en-US` -> `en`, `en` -> `en`.
fn primary_subtag(tag: &str) -> &str {
    tag.split(['_', '-', '.', '@'])
        .next()
        .unwrap_or(tag)
}

/// Detect a supported language from the process locale environment.
///
/// Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in POSIX precedence order and
/// returns the first one whose primary subtag is a supported language.
pub fn detect_from_env() -> Option<Language> {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var)
            && let Some(language) = Language::from_code(primary_subtag(&value))
        {
            return Some(language);
        }
    }
    None
}

/// Persistent key-value store for the language preference.
///
/// The backing file is a small JSON object; only [`LANGUAGE_STORAGE_KEY`] is
/// read by this crate, but unknown keys are preserved on save.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> Option<BTreeMap<String, serde_json::Value>> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read the persisted language, if any.
    ///
    /// A missing file, unreadable JSON, or an unsupported code all yield
    /// `None`; corruption here is recoverable by falling back to detection.
    pub fn load(&self) -> Option<Language> {
        let map = self.read_map()?;
        let code = map.get(LANGUAGE_STORAGE_KEY)?.as_str()?;
        let language = Language::from_code(code);
        if language.is_none() {
            tracing::debug!(code, "ignoring unsupported persisted language");
        }
        language
    }

    /// Persist the language preference, keeping any other stored keys.
    pub fn save(&self, language: Language) -> Result<()> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(
            LANGUAGE_STORAGE_KEY.to_string(),
            serde_json::Value::String(language.code().to_string()),
        );
        let content = serde_json::to_string_pretty(&map)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preference file: {}", self.path.display()))
    }
}

/// Resolve the startup language: persisted preference, then locale
/// environment, then the default.
pub fn initial_language(store: &PreferenceStore) -> Language {
    store
        .load()
        .or_else(detect_from_env)
        .unwrap_or_default()
}

/// Callback invoked when the active language changes.
pub type LanguageSubscriber = Box<dyn Fn(Language)>;

/// The active language plus an explicit subscriber list.
///
/// Consumers that need to react to a language switch (e.g. resetting an
/// in-flight reveal sequence) register a subscriber; there is no ambient
/// global state.
pub struct LanguageState {
    active: Language,
    subscribers: Vec<LanguageSubscriber>,
}

impl LanguageState {
    pub fn new(initial: Language) -> Self {
        Self {
            active: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn active(&self) -> Language {
        self.active
    }

    /// Register a callback fired on every effective language change.
    pub fn subscribe(&mut self, subscriber: LanguageSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Switch the active language. Setting the current language is a no-op
    /// and does not notify subscribers.
    pub fn set(&mut self, language: Language) {
        if language == self.active {
            return;
        }
        self.active = language;
        for subscriber in &self.subscribers {
            subscriber(language);
        }
    }

    /// Switch by code. Unsupported codes are ignored, keeping the current
    /// language (a corrupted preference or unknown locale is not an error).
    pub fn set_code(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set(language),
            None => tracing::debug!(code, "ignoring unsupported language code"),
        }
    }
}

impl fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
