//! Release workflow orchestration
//!
//! Each operation expands into a fixed list of command lines (see
//! [crate::commands]) which are announced and run one at a time. The first
//! failing command ends the operation; nothing already done is undone.

use crate::cli::args::{Operation, PublishOptions};
use crate::commands;
use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::runner::CommandRunner;
use crate::ui;
use crate::version::normalize_version;

/// Result of a successful publish run
///
/// In a dry run `built` and `uploaded` stay false since nothing ran.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    /// The tag that was created and pushed
    pub tag: String,

    /// Whether distributions were built
    pub built: bool,

    /// Whether distributions were uploaded
    pub uploaded: bool,
}

/// Runs release operations against an explicit configuration.
pub struct Orchestrator<'a, R: CommandRunner> {
    config: &'a ReleaseConfig,
    runner: &'a R,
}

impl<'a, R: CommandRunner> Orchestrator<'a, R> {
    pub fn new(config: &'a ReleaseConfig, runner: &'a R) -> Self {
        Orchestrator { config, runner }
    }

    /// Dispatch a parsed operation.
    pub fn execute(&self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::Publish { version, options } => {
                self.publish_version(version, options)?;
            }
            Operation::DeleteTag { version } => {
                self.delete_tag(version)?;
            }
            Operation::InitRepo { repo_name, private } => {
                self.init_github_repo(repo_name.as_deref(), *private)?;
            }
        }
        Ok(())
    }

    fn run_steps(&self, steps: &[String]) -> Result<()> {
        for step in steps {
            ui::display_executing(step, self.runner.is_dry_run());
            self.runner.run(step)?;
        }
        Ok(())
    }

    /// Create a tag and push it to the remote. Returns the normalized tag.
    pub fn create_tag(&self, version: &str) -> Result<String> {
        let tag = normalize_version(version);
        log::info!("creating tag {} on {}", tag, self.config.remote);

        self.run_steps(&commands::create_tag_commands(self.config, &tag))?;

        ui::display_success(&format!("Successfully created and pushed tag {}", tag));
        Ok(tag)
    }

    /// Delete a tag locally and from the remote. Returns the normalized tag.
    pub fn delete_tag(&self, version: &str) -> Result<String> {
        let tag = normalize_version(version);
        log::info!("deleting tag {} from {}", tag, self.config.remote);

        self.run_steps(&commands::delete_tag_commands(self.config, &tag))?;

        ui::display_success(&format!(
            "Successfully deleted tag {} locally and from {}",
            tag, self.config.remote
        ));
        Ok(tag)
    }

    pub fn build_package(&self) -> Result<()> {
        self.run_steps(&commands::build_commands(self.config))?;
        ui::display_success("Successfully built package");
        Ok(())
    }

    pub fn upload_package(&self) -> Result<()> {
        self.run_steps(&commands::upload_commands(self.config))?;
        ui::display_success("Successfully uploaded package to PyPI");
        Ok(())
    }

    /// Make sure a local repository exists, then create and push the hosted one.
    ///
    /// Without a name, the working directory's base name is used. Returns the
    /// repository name.
    pub fn init_github_repo(&self, repo_name: Option<&str>, private: bool) -> Result<String> {
        let repo_name = match repo_name {
            Some(name) => name.to_string(),
            None => self.config.directory_name()?,
        };

        if self.runner.probe(&commands::status_command(self.config))? {
            ui::display_status("Git repository already exists");
        } else {
            ui::display_status("Initializing git repository...");
            self.run_steps(&commands::init_local_repo_commands(self.config))?;
        }

        let create = commands::create_remote_repo_command(self.config, &repo_name, private);
        self.run_steps(&[create])?;

        ui::display_success(&format!(
            "Successfully created GitHub repository: {}",
            repo_name
        ));
        Ok(repo_name)
    }

    /// Tag, build and upload, stopping early as the options request.
    pub fn publish_version(&self, version: &str, options: &PublishOptions) -> Result<PublishReport> {
        let tag = self.create_tag(version)?;
        let mut report = PublishReport {
            tag,
            built: false,
            uploaded: false,
        };

        if options.tag_only {
            return Ok(report);
        }

        if !options.no_build {
            self.build_package()?;
            report.built = !self.runner.is_dry_run();
        }

        if options.build_only || options.no_upload {
            return Ok(report);
        }

        self.upload_package()?;
        report.uploaded = !self.runner.is_dry_run();

        ui::display_success(&format!("Successfully published version {}", report.tag));
        Ok(report)
    }
}
