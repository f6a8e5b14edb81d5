//! Pure formatting functions for UI output.
//!
//! Functions here build the lines printed to the terminal but never print
//! them, so their exact text is testable.

use console::style;

use crate::error::PublishError;

/// Line announcing a command right before it runs.
pub fn format_executing(command: &str, dry_run: bool) -> String {
    let prefix = if dry_run {
        "Would execute:"
    } else {
        "Executing:"
    };
    format!("{} {}", style(prefix).cyan(), command)
}

/// Success line with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Diagnostic lines for a failed run.
///
/// Command failures name the command first and the cause second; every
/// other error is a single line.
pub fn format_failure(error: &PublishError) -> Vec<String> {
    match error.command() {
        Some(command) => vec![
            format!("{} {}", style("Error executing command:").red(), command),
            format!("{} {}", style("Error:").red(), error.reason()),
        ],
        None => vec![format!("{} {}", style("Error:").red(), error)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn test_format_executing() {
        plain();
        assert_eq!(
            format_executing("git tag v1.0.0", false),
            "Executing: git tag v1.0.0"
        );
        assert_eq!(
            format_executing("git tag v1.0.0", true),
            "Would execute: git tag v1.0.0"
        );
    }

    #[test]
    fn test_format_success_and_status() {
        plain();
        assert_eq!(format_success("Successfully built package"), "✓ Successfully built package");
        assert_eq!(
            format_status("Initializing git repository..."),
            "→ Initializing git repository..."
        );
    }

    #[test]
    fn test_format_command_failure() {
        plain();
        let err = PublishError::command_failed("git push origin v1.0.0", "exit status: 1");
        assert_eq!(
            format_failure(&err),
            vec![
                "Error executing command: git push origin v1.0.0",
                "Error: exit status: 1",
            ]
        );
    }

    #[test]
    fn test_format_other_failure() {
        plain();
        let err = PublishError::config("cannot derive a repository name from /");
        assert_eq!(
            format_failure(&err),
            vec!["Error: Configuration error: cannot derive a repository name from /"]
        );
    }
}
