//! Report formatting and printing utilities.
//!
//! Kept separate from the core library logic so marquee can be used as a
//! library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format, followed by a problem summary.
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    // Align the note column on the widest key (display width, not bytes,
    // since keys and values may be Cyrillic).
    let key_width = sorted
        .iter()
        .map(|i| UnicodeWidthStr::width(i.message.as_str()))
        .max()
        .unwrap_or(0);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"{:>padding$}  {}",
            severity_str,
            issue.message,
            "",
            issue.rule.to_string().dimmed().cyan(),
            padding = key_width.saturating_sub(UnicodeWidthStr::width(issue.message.as_str())),
        );

        if let Some(locale) = &issue.locale {
            println!("  {} {}.json", "-->".blue(), locale);
        }
        if let Some(details) = &issue.details {
            println!("  {} {} {}", "=".blue(), "note:".bold(), details);
        }
        println!();
    }

    let total_errors = sorted
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Shows how many locale files were compared so the user can see the check
/// actually covered the expected scope.
pub fn print_success(locale_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print files the catalog scan skipped (unsupported locale codes).
pub fn print_skipped_files(skipped: &[String], verbose: bool) {
    if skipped.is_empty() {
        return;
    }
    if verbose {
        for reason in skipped {
            eprintln!("{} {}", "warning:".bold().yellow(), reason);
        }
    } else {
        eprintln!(
            "{} {} locale file(s) skipped (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        );
    }
}
