//! Dotted-key resolution and `{{param}}` interpolation.
//!
//! Lookup tries the whole dotted key as a single flat entry first, then
//! descends segment by segment, so catalogs that mix flat dotted keys with
//! nested objects behave identically. A missing or non-string key is a
//! recoverable condition: it is logged and the literal key text is returned
//! so callers always get something renderable.

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

use crate::catalog::{CatalogValue, LanguageCatalog};

/// Matches `{{name}}` interpolation tokens.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// A substitution value for one `{{name}}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{s}"),
            ParamValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(i64::from(value))
    }
}

/// Named substitution values, supplied per resolution call.
pub type Params<'a> = [(&'a str, ParamValue)];

/// Walk the catalog tree: flat full-key lookup first, then segment descent.
fn lookup<'a>(root: &'a CatalogValue, key: &str) -> Option<&'a CatalogValue> {
    if let Some(value) = root.get(key) {
        return Some(value);
    }
    let mut current = root;
    for segment in key.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Replace every `{{name}}` token with the matching param value.
///
/// Unmatched placeholders are left verbatim; substitution is a single pass,
/// so values containing `{{...}}` are not re-expanded.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match params.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Resolve a dotted key to a display string.
///
/// On any failure (absent key, or a key that names an object/array instead
/// of a string) the literal key text is returned and a diagnostic is logged;
/// this never panics and never propagates an error, so missing content
/// degrades to showing the raw key.
pub fn resolve(catalog: &LanguageCatalog, key: &str, params: &Params) -> String {
    // The flat layout can shadow a nested entry only with a string, so
    // prefer the flat hit when it is a leaf.
    let leaf = catalog
        .root()
        .get(key)
        .and_then(CatalogValue::as_leaf)
        .or_else(|| lookup(catalog.root(), key).and_then(CatalogValue::as_leaf));

    match leaf {
        Some(text) => interpolate(text, params),
        None => {
            tracing::warn!(
                language = %catalog.language(),
                key,
                "missing translation, falling back to literal key"
            );
            key.to_string()
        }
    }
}

/// Resolve a dotted key to the raw subtree, with no interpolation and no
/// fallback substitution. Callers wanting structured data (e.g. an ordered
/// list of case studies) use this and handle `None` themselves.
pub fn resolve_nested<'a>(catalog: &'a LanguageCatalog, key: &str) -> Option<&'a CatalogValue> {
    lookup(catalog.root(), key)
}

/// Resolve a subtree and decode it into a caller type.
pub fn resolve_as<T: serde::de::DeserializeOwned>(
    catalog: &LanguageCatalog,
    key: &str,
) -> Option<T> {
    resolve_nested(catalog, key)?.decode()
}
