//! Locale catalog model and loading.
//!
//! A catalog is the complete translation tree for one language, loaded once
//! from a `<code>.json` file and immutable afterwards. Values form a tagged
//! union of string leaves, nested nodes, and ordered lists, so "not found"
//! and "found but wrong shape" are distinct, inspectable outcomes rather
//! than `undefined` propagation.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::language::Language;

/// A value in a catalog tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// A terminal string.
    Leaf(String),
    /// A nested mapping of key to value.
    Node(BTreeMap<String, CatalogValue>),
    /// An ordered sequence (e.g. case studies, team members).
    List(Vec<CatalogValue>),
}

impl CatalogValue {
    /// Convert parsed JSON into a catalog value.
    ///
    /// Scalar non-string JSON values (numbers, booleans) are coerced to
    /// string leaves; `null` becomes an empty leaf. Catalog data is display
    /// content, so everything terminal is text.
    pub fn from_json(value: &Value) -> CatalogValue {
        match value {
            Value::String(s) => CatalogValue::Leaf(s.clone()),
            Value::Object(map) => CatalogValue::Node(
                map.iter()
                    .map(|(key, val)| (key.clone(), CatalogValue::from_json(val)))
                    .collect(),
            ),
            Value::Array(items) => {
                CatalogValue::List(items.iter().map(CatalogValue::from_json).collect())
            }
            Value::Null => CatalogValue::Leaf(String::new()),
            other => CatalogValue::Leaf(other.to_string()),
        }
    }

    /// Render back to JSON (used for typed decoding and `--nested` output).
    pub fn to_json(&self) -> Value {
        match self {
            CatalogValue::Leaf(s) => Value::String(s.clone()),
            CatalogValue::Node(map) => Value::Object(
                map.iter()
                    .map(|(key, val)| (key.clone(), val.to_json()))
                    .collect(),
            ),
            CatalogValue::List(items) => {
                Value::Array(items.iter().map(CatalogValue::to_json).collect())
            }
        }
    }

    /// Decode this subtree into a caller type. Shape mismatches yield `None`.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.to_json()).ok()
    }

    /// Child lookup; only nodes have children.
    pub fn get(&self, segment: &str) -> Option<&CatalogValue> {
        match self {
            CatalogValue::Node(map) => map.get(segment),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            CatalogValue::Leaf(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[CatalogValue]> {
        match self {
            CatalogValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short shape name for diagnostics ("string", "object", "array").
    pub fn shape(&self) -> &'static str {
        match self {
            CatalogValue::Leaf(_) => "string",
            CatalogValue::Node(_) => "object",
            CatalogValue::List(_) => "array",
        }
    }
}

/// The complete translation tree for one language.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    language: Language,
    root: CatalogValue,
}

impl LanguageCatalog {
    /// Build a catalog from an already-parsed JSON document.
    ///
    /// The top level must be an object; anything else cannot hold keys.
    pub fn from_json(language: Language, value: &Value) -> Result<LanguageCatalog> {
        if !value.is_object() {
            bail!(
                "catalog root for '{}' must be a JSON object, got {}",
                language,
                json_type_name(value)
            );
        }
        Ok(LanguageCatalog {
            language,
            root: CatalogValue::from_json(value),
        })
    }

    /// Load a catalog from a `<code>.json` file.
    pub fn load(language: Language, path: &Path) -> Result<LanguageCatalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        Self::from_json(language, &json)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root(&self) -> &CatalogValue {
        &self.root
    }

    /// Flattened view: every leaf keyed by its dotted path.
    ///
    /// Catalogs that already store flat dotted keys and catalogs that nest
    /// objects produce identical views, which is what `check` diffs.
    pub fn flat_leaves(&self) -> BTreeMap<String, String> {
        let mut leaves = BTreeMap::new();
        flatten(&self.root, String::new(), &mut leaves);
        leaves
    }
}

fn flatten(value: &CatalogValue, prefix: String, leaves: &mut BTreeMap<String, String>) {
    match value {
        CatalogValue::Leaf(s) => {
            if !prefix.is_empty() {
                leaves.insert(prefix, s.clone());
            }
        }
        CatalogValue::Node(map) => {
            for (key, val) in map {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(val, child_prefix, leaves);
            }
        }
        // Lists are structured records, reached via resolve_nested; their
        // contents are not part of the leaf diff.
        CatalogValue::List(_) => {}
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract the locale code from a catalog file name (`bg.json` -> `bg`).
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// All catalogs loaded from a locales directory.
#[derive(Debug, Default)]
pub struct CatalogSet {
    catalogs: BTreeMap<Language, LanguageCatalog>,
}

/// Result of scanning a locales directory.
#[derive(Debug, Default)]
pub struct CatalogScan {
    pub set: CatalogSet,
    /// Files that could not be read or parsed as a catalog.
    pub parse_failures: Vec<String>,
    /// Files skipped because their name is not a supported locale code.
    pub skipped: Vec<String>,
    /// Number of catalog files successfully loaded.
    pub files_loaded: usize,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, catalog: LanguageCatalog) {
        self.catalogs.insert(catalog.language(), catalog);
    }

    pub fn get(&self, language: Language) -> Option<&LanguageCatalog> {
        self.catalogs.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.catalogs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Load every `<code>.json` in a directory.
    ///
    /// Files named after an unsupported locale code are skipped and
    /// unparseable files are collected as parse failures; neither fails the
    /// whole scan. A missing or non-directory path is a hard error.
    pub fn load_dir(locales_dir: impl AsRef<Path>) -> Result<CatalogScan> {
        let locales_dir = locales_dir.as_ref();
        let mut scan = CatalogScan::default();

        if !locales_dir.exists() {
            bail!(
                "Locales directory '{}' does not exist.\n\
                 Hint: Check your .marqueerc.json 'localesRoot' setting.",
                locales_dir.display()
            );
        }
        if !locales_dir.is_dir() {
            bail!("'{}' is not a directory.", locales_dir.display());
        }

        for entry in fs::read_dir(locales_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = extract_locale(&path) else {
                continue;
            };
            let Some(language) = Language::from_code(&code) else {
                scan.skipped.push(format!(
                    "Skipping {:?}: '{}' is not a supported language",
                    path, code
                ));
                continue;
            };
            match LanguageCatalog::load(language, &path) {
                Ok(catalog) => {
                    scan.set.insert(catalog);
                    scan.files_loaded += 1;
                }
                Err(e) => scan
                    .parse_failures
                    .push(format!("Failed to load {:?}: {}", path, e)),
            }
        }

        Ok(scan)
    }
}
