//! Command line construction for each release step.
//!
//! Every function here is pure: it turns the run configuration plus the
//! operation's inputs into the exact shell command lines the orchestrator
//! will execute, in order.

use crate::config::ReleaseConfig;

/// Message used for the commit created when initializing a repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Shell that interprets the generated command lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    /// `sh -c`
    Posix,
    /// `cmd /C`
    Cmd,
}

impl ShellFlavor {
    /// The shell the runner uses on the current platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            ShellFlavor::Cmd
        } else {
            ShellFlavor::Posix
        }
    }

    /// Quote a single argument for this shell.
    pub fn quote(self, arg: &str) -> String {
        match self {
            ShellFlavor::Posix => quote_arg(arg),
            ShellFlavor::Cmd => quote_arg_cmd(arg),
        }
    }
}

const CMD_META: &[char] = &[
    ' ', '\t', '"', '&', '|', '<', '>', '^', '%', '(', ')', '!',
];

const SHELL_META: &[char] = &[
    ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}', '<',
    '>', '|', '&', ';', '#', '~',
];

/// Quote a single argument for `sh -c`.
///
/// Plain words pass through untouched; anything containing shell
/// metacharacters is single-quoted with embedded quotes escaped.
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Quote a single argument for `cmd /C`.
///
/// Arguments with spaces or `cmd` metacharacters are wrapped in double
/// quotes; embedded double quotes become `\"` as the C runtime expects.
/// `%` expansion cannot be suppressed inside quotes.
pub fn quote_arg_cmd(arg: &str) -> String {
    if arg.is_empty() {
        return "\"\"".to_string();
    }

    if !arg.contains(CMD_META) {
        return arg.to_string();
    }

    format!("\"{}\"", arg.replace('"', "\\\""))
}

fn command_line(config: &ReleaseConfig, program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&config.shell.quote(arg));
    }
    line
}

fn git(config: &ReleaseConfig, args: &[&str]) -> String {
    command_line(config, &config.tools.git, args)
}

/// Create the tag locally, then push it to the remote.
pub fn create_tag_commands(config: &ReleaseConfig, tag: &str) -> Vec<String> {
    vec![
        git(config, &["tag", tag]),
        git(config, &["push", config.remote.as_str(), tag]),
    ]
}

/// Delete the tag locally, then from the remote.
pub fn delete_tag_commands(config: &ReleaseConfig, tag: &str) -> Vec<String> {
    vec![
        git(config, &["tag", "-d", tag]),
        git(config, &["push", config.remote.as_str(), "--delete", tag]),
    ]
}

/// Remove stale artifacts, then build fresh distributions.
pub fn build_commands(config: &ReleaseConfig) -> Vec<String> {
    vec![
        config.tools.clean_command.clone(),
        config.tools.build_command.clone(),
    ]
}

/// Upload everything under `dist/`.
pub fn upload_commands(config: &ReleaseConfig) -> Vec<String> {
    vec![config.tools.upload_command.clone()]
}

/// Read-only query telling whether the working directory is a repository.
pub fn status_command(config: &ReleaseConfig) -> String {
    git(config, &["status"])
}

/// Initialize a repository and record everything in a first commit.
pub fn init_local_repo_commands(config: &ReleaseConfig) -> Vec<String> {
    vec![
        git(config, &["init"]),
        git(config, &["add", "."]),
        git(config, &["commit", "-m", INITIAL_COMMIT_MESSAGE]),
    ]
}

/// Create the hosted repository from the working directory and push it.
pub fn create_remote_repo_command(config: &ReleaseConfig, repo_name: &str, private: bool) -> String {
    let visibility = if private { "--private" } else { "--public" };
    let remote_flag = format!("--remote={}", config.remote);
    let args = [
        "repo",
        "create",
        repo_name,
        visibility,
        "--source=.",
        remote_flag.as_str(),
        "--push",
    ];

    command_line(config, &config.tools.gh, &args)
}
