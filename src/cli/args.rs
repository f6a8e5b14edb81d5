//! Command-line surface and operation selection.

use std::path::PathBuf;

use crate::error::{PublishError, Result};

const EXAMPLES: &str = "\
Examples:
  pypublish --init-repo              # Initialize git and create GitHub repo
  pypublish --init-repo myproject    # Initialize with custom repo name
  pypublish --init-repo --private    # Create private GitHub repo
  pypublish 0.2.0                    # Full publish: tag, build, upload
  pypublish v0.2.0                   # Full publish: tag, build, upload
  pypublish 0.2.0 --tag-only         # Only create and push tag
  pypublish 0.2.0 --build-only       # Tag and build, don't upload
  pypublish 0.2.0 --no-build         # Tag and upload existing dist
  pypublish 0.2.0 --no-upload        # Tag and build, don't upload
  pypublish --delete-tag 0.2.0       # Delete tag locally and from origin
  pypublish --delete-tag v0.2.0      # Delete tag locally and from origin";

#[derive(clap::Parser, Debug, Clone, PartialEq)]
#[command(
    name = "pypublish",
    version,
    about = "Publish or delete package versions",
    after_help = EXAMPLES
)]
pub struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version number (e.g., 0.2.0 or v0.2.0) or repo name for --init-repo"
    )]
    pub target: Option<String>,

    #[arg(long, help = "Initialize git repo and create GitHub repository")]
    pub init_repo: bool,

    #[arg(long, help = "Create private GitHub repository (use with --init-repo)")]
    pub private: bool,

    #[arg(long, help = "Delete the tag locally and from origin instead of publishing")]
    pub delete_tag: bool,

    #[arg(long, help = "Only create and push the git tag")]
    pub tag_only: bool,

    #[arg(long, help = "Create tag and build package, but do not upload")]
    pub build_only: bool,

    #[arg(long, help = "Skip build step (use existing dist/)")]
    pub no_build: bool,

    #[arg(long, help = "Skip upload step (same as --build-only)")]
    pub no_upload: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short = 'C', long, help = "Run as if started in this directory")]
    pub directory: Option<PathBuf>,

    #[arg(long, help = "Remote to push tags to (default: origin)")]
    pub remote: Option<String>,

    #[arg(long, help = "Print the commands without running them")]
    pub dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,
}

/// Modifiers that cut the publish pipeline short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishOptions {
    pub tag_only: bool,
    pub build_only: bool,
    pub no_build: bool,
    pub no_upload: bool,
}

/// The single operation a run performs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Publish {
        version: String,
        options: PublishOptions,
    },
    DeleteTag {
        version: String,
    },
    InitRepo {
        repo_name: Option<String>,
        private: bool,
    },
}

impl Args {
    /// Selects the operation; `--init-repo` wins over `--delete-tag`, which wins over publishing.
    pub fn operation(&self) -> Result<Operation> {
        if self.init_repo {
            return Ok(Operation::InitRepo {
                repo_name: self.target.clone(),
                private: self.private,
            });
        }

        if self.delete_tag {
            let version = self.target.clone().ok_or_else(|| {
                PublishError::missing_argument("version is required for --delete-tag")
            })?;
            return Ok(Operation::DeleteTag { version });
        }

        let version = self
            .target
            .clone()
            .ok_or_else(|| PublishError::missing_argument("version is required"))?;

        Ok(Operation::Publish {
            version,
            options: PublishOptions {
                tag_only: self.tag_only,
                build_only: self.build_only,
                no_build: self.no_build,
                no_upload: self.no_upload,
            },
        })
    }
}
