use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::commands::ShellFlavor;
use crate::config::ReleaseConfig;
use crate::error::{PublishError, Result};
use crate::runner::CommandRunner;

/// Runs commands through the platform shell inside the configured working directory.
pub struct ShellRunner {
    working_dir: PathBuf,
    env: BTreeMap<String, String>,
    shell: ShellFlavor,
}

impl ShellRunner {
    pub fn new(config: &ReleaseConfig) -> Self {
        ShellRunner {
            working_dir: config.working_dir.clone(),
            env: config.env.clone(),
            shell: config.shell,
        }
    }

    fn command(&self, command: &str) -> Command {
        // Quoting in `commands` follows the same flavor
        let mut cmd = match self.shell {
            ShellFlavor::Cmd => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", command]);
                cmd
            }
            ShellFlavor::Posix => {
                let mut cmd = Command::new("sh");
                cmd.args(["-c", command]);
                cmd
            }
        };

        cmd.current_dir(&self.working_dir);
        cmd.envs(&self.env);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<()> {
        log::debug!("running `{}` in {}", command, self.working_dir.display());

        let status = self
            .command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| PublishError::spawn(command, e))?;

        log::debug!("`{}` finished with {}", command, status);

        if status.success() {
            Ok(())
        } else {
            Err(PublishError::command_failed(command, status.to_string()))
        }
    }

    fn probe(&self, command: &str) -> Result<bool> {
        log::debug!("probing `{}` in {}", command, self.working_dir.display());

        let output = self
            .command(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PublishError::spawn(command, e))?;

        if !output.status.success() {
            log::debug!(
                "probe `{}` failed: {}",
                command,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.status.success())
    }
}
