//! Printing for `check` outcomes.

use crate::commands::CheckOutcome;
use crate::report::{print_report, print_skipped_files, print_success};

pub fn print(outcome: &CheckOutcome, verbose: bool) {
    if outcome.issues.is_empty() {
        print_success(outcome.locale_files_checked);
    } else {
        print_report(&outcome.issues);
    }
    print_skipped_files(&outcome.files_skipped, verbose);
}
