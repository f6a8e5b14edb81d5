use std::sync::Mutex;

use crate::error::{PublishError, Result};
use crate::runner::CommandRunner;

/// Mock runner for testing without spawning processes
///
/// Records every command it is asked to run. A command configured with
/// [MockRunner::failing_on] is recorded and then fails with exit status 1.
pub struct MockRunner {
    executed: Mutex<Vec<String>>,
    probed: Mutex<Vec<String>>,
    fail_on: Vec<String>,
    probe_result: bool,
}

impl MockRunner {
    /// Create a runner where every command succeeds and probes report success
    pub fn new() -> Self {
        MockRunner {
            executed: Mutex::new(Vec::new()),
            probed: Mutex::new(Vec::new()),
            fail_on: Vec::new(),
            probe_result: true,
        }
    }

    /// Make the given command line exit unsuccessfully
    pub fn failing_on(mut self, command: impl Into<String>) -> Self {
        self.fail_on.push(command.into());
        self
    }

    /// Set the outcome reported for every probe
    pub fn with_probe_result(mut self, result: bool) -> Self {
        self.probe_result = result;
        self
    }

    /// Commands run so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    /// Probes run so far, in order
    pub fn probed(&self) -> Vec<String> {
        self.probed
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<()> {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(command.to_string());
        }

        if self.fail_on.iter().any(|failing| failing == command) {
            return Err(PublishError::command_failed(command, "exit status: 1"));
        }

        Ok(())
    }

    fn probe(&self, command: &str) -> Result<bool> {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(command.to_string());
        }
        Ok(self.probe_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_records_commands() {
        let runner = MockRunner::new();
        runner.run("git tag v1.0.0").unwrap();
        runner.run("git push origin v1.0.0").unwrap();

        assert_eq!(
            runner.executed(),
            vec!["git tag v1.0.0", "git push origin v1.0.0"]
        );
        assert!(runner.probed().is_empty());
    }

    #[test]
    fn test_mock_runner_failure() {
        let runner = MockRunner::new().failing_on("git push origin v1.0.0");
        assert!(runner.run("git tag v1.0.0").is_ok());

        let err = runner.run("git push origin v1.0.0").unwrap_err();
        assert_eq!(err.command(), Some("git push origin v1.0.0"));
        assert_eq!(runner.executed().len(), 2);
    }

    #[test]
    fn test_mock_runner_probe() {
        let runner = MockRunner::default();
        assert!(runner.probe("git status").unwrap());

        let runner = MockRunner::new().with_probe_result(false);
        assert!(!runner.probe("git status").unwrap());
        assert_eq!(runner.probed(), vec!["git status"]);
    }
}
