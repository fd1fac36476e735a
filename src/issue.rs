use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    ShapeMismatch,
    OrphanKey,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ShapeMismatch => write!(f, "shape-mismatch"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// One catalog-consistency finding, as produced by `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Locale the finding is about (the lagging/offending catalog).
    pub locale: Option<String>,
    pub key: Option<String>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
}

impl Issue {
    pub fn missing_key(locale: &str, key: &str, default_value: &str) -> Self {
        Self {
            locale: Some(locale.to_string()),
            key: Some(key.to_string()),
            message: key.to_string(),
            severity: Severity::Error,
            rule: Rule::MissingKey,
            details: Some(format!("(\"{}\") missing in: {}", default_value, locale)),
        }
    }

    pub fn shape_mismatch(locale: &str, key: &str, found_shape: &str) -> Self {
        Self {
            locale: Some(locale.to_string()),
            key: Some(key.to_string()),
            message: key.to_string(),
            severity: Severity::Error,
            rule: Rule::ShapeMismatch,
            details: Some(format!(
                "expected a string in {}, found {}",
                locale, found_shape
            )),
        }
    }

    pub fn orphan_key(locale: &str, key: &str, value: &str) -> Self {
        Self {
            locale: Some(locale.to_string()),
            key: Some(key.to_string()),
            message: key.to_string(),
            severity: Severity::Warning,
            rule: Rule::OrphanKey,
            details: Some(format!("in {} (\"{}\")", locale, value)),
        }
    }

    pub fn parse_error(detail: &str) -> Self {
        Self {
            locale: None,
            key: None,
            message: detail.to_string(),
            severity: Severity::Error,
            rule: Rule::ParseError,
            details: None,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: rule, locale (None last), key, message. Key and message
        // comparison keeps output deterministic when several issues share a
        // locale (map iteration order must not leak into reports).
        self.rule
            .cmp(&other.rule)
            .then_with(|| match (&self.locale, &other.locale) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.key.cmp(&other.key))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
