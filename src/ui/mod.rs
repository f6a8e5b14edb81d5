//! User interface module.
//!
//! All progress and diagnostics go to standard output; `formatter` owns the
//! text, this module owns the printing.

use crate::error::PublishError;

pub mod formatter;

pub use formatter::{format_executing, format_failure, format_status, format_success};

pub fn display_executing(command: &str, dry_run: bool) {
    println!("{}", format_executing(command, dry_run));
}

pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Print the diagnostic for a failed run.
pub fn display_failure(error: &PublishError) {
    for line in format_failure(error) {
        println!("{}", line);
    }
}
