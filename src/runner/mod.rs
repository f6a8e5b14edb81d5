//! Command execution abstraction layer
//!
//! The orchestrator never spawns processes itself. It hands complete shell
//! command lines to a [CommandRunner], which lets the same release logic run
//! for real ([ShellRunner]), as a preview ([DryRunRunner]), or against a
//! recording double in tests ([MockRunner]).

pub mod dry_run;
pub mod mock;
pub mod shell;

pub use dry_run::DryRunRunner;
pub use mock::MockRunner;
pub use shell::ShellRunner;

use crate::error::Result;

/// Executes external commands on behalf of the orchestrator.
///
/// ## Error Handling
///
/// `run` maps a non-zero exit to [crate::error::PublishError::CommandFailed]
/// and a failure to start the shell to [crate::error::PublishError::Spawn].
/// `probe` only fails for the latter; an unsuccessful exit is `Ok(false)`.
pub trait CommandRunner: Send + Sync {
    /// Run a command with inherited stdio and wait for it to finish.
    fn run(&self, command: &str) -> Result<()>;

    /// Run a read-only query with captured output and report whether it succeeded.
    fn probe(&self, command: &str) -> Result<bool>;

    /// True when commands are only being previewed.
    fn is_dry_run(&self) -> bool {
        false
    }
}
