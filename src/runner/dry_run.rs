use crate::error::Result;
use crate::runner::CommandRunner;

/// Previews commands instead of running them.
///
/// Probes are read-only, so they are forwarded to the wrapped runner to keep
/// the preview faithful to the branch a real run would take.
pub struct DryRunRunner<R: CommandRunner> {
    inner: R,
}

impl<R: CommandRunner> DryRunRunner<R> {
    pub fn new(inner: R) -> Self {
        DryRunRunner { inner }
    }

    /// The runner probes are forwarded to
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: CommandRunner> CommandRunner for DryRunRunner<R> {
    fn run(&self, command: &str) -> Result<()> {
        log::debug!("dry run, skipping `{}`", command);
        Ok(())
    }

    fn probe(&self, command: &str) -> Result<bool> {
        self.inner.probe(command)
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    #[test]
    fn test_dry_run_skips_commands() {
        let inner = MockRunner::new().failing_on("git tag v1.0.0");
        let runner = DryRunRunner::new(inner);

        assert!(runner.run("git tag v1.0.0").is_ok());
        assert!(runner.is_dry_run());
        assert!(runner.inner().executed().is_empty());
    }

    #[test]
    fn test_dry_run_forwards_probes() {
        let runner = DryRunRunner::new(MockRunner::new().with_probe_result(false));
        assert!(!runner.probe("git status").unwrap());
        assert_eq!(runner.inner().probed(), vec!["git status"]);
    }
}
