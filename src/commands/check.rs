//! `check`: diff every locale catalog against the default language.
//!
//! The default language's catalog is the reference. Every leaf it defines
//! must exist as a string leaf in every other locale (missing-key /
//! shape-mismatch, both errors); keys only present in a non-default locale
//! are orphans (warning). Unparseable files surface as parse-error issues;
//! files for unsupported locale codes are merely reported as skipped.

use anyhow::{Result, bail};

use crate::{
    catalog::{CatalogValue, LanguageCatalog},
    cli::CheckCommand,
    issue::Issue,
    language::Language,
    resolve::resolve_nested,
};

use super::shared::{load_catalogs, load_context};

/// What a `check` run found.
#[derive(Debug, Default)]
pub struct CheckOutcome {
    pub issues: Vec<Issue>,
    pub locale_files_checked: usize,
    /// Files skipped by the scan (unsupported locale codes), never issues.
    pub files_skipped: Vec<String>,
}

impl CheckOutcome {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == crate::issue::Severity::Error)
            .count()
    }
}

pub fn check(cmd: &CheckCommand) -> Result<CheckOutcome> {
    let ctx = load_context(&cmd.common)?;
    let scan = load_catalogs(&ctx)?;

    // --language retargets the reference catalog; default otherwise.
    let reference_language = match &cmd.common.language {
        Some(code) => match Language::from_code(code) {
            Some(language) => language,
            None => bail!("Unsupported language code: \"{}\"", code),
        },
        None => ctx.config.default_language(),
    };

    let Some(reference) = scan.set.get(reference_language) else {
        bail!(
            "No catalog for the reference language '{}' in {}",
            reference_language,
            ctx.locales_root.display()
        );
    };

    let mut outcome = CheckOutcome {
        locale_files_checked: scan.files_loaded,
        files_skipped: scan.skipped.clone(),
        ..Default::default()
    };
    for failure in &scan.parse_failures {
        outcome.issues.push(Issue::parse_error(failure));
    }

    for language in scan.set.languages() {
        if language == reference_language {
            continue;
        }
        // load_dir only inserts catalogs it could parse.
        if let Some(catalog) = scan.set.get(language) {
            diff_against_reference(reference, catalog, &mut outcome.issues);
        }
    }

    outcome.issues.sort();
    Ok(outcome)
}

fn diff_against_reference(
    reference: &LanguageCatalog,
    catalog: &LanguageCatalog,
    issues: &mut Vec<Issue>,
) {
    let locale = catalog.language().code();
    let reference_leaves = reference.flat_leaves();

    for (key, default_value) in &reference_leaves {
        match resolve_nested(catalog, key) {
            None => issues.push(Issue::missing_key(locale, key, default_value)),
            Some(CatalogValue::Leaf(_)) => {}
            Some(other) => issues.push(Issue::shape_mismatch(locale, key, other.shape())),
        }
    }

    for (key, value) in catalog.flat_leaves() {
        if !reference_leaves.contains_key(&key) {
            issues.push(Issue::orphan_key(locale, &key, &value));
        }
    }
}
