use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::ShellFlavor;
use crate::error::{PublishError, Result};

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "pypublish.toml";

/// Name of the per-user configuration file inside the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".pypublish.toml";

/// Represents the on-disk configuration for pypublish.
///
/// Every field is optional in the file; missing values fall back to the
/// behaviour of a plain `git` / `python -m build` / `twine` setup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub tools: ToolsConfig,

    /// Extra environment handed to every subprocess, e.g. `TWINE_USERNAME`.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_git() -> String {
    "git".to_string()
}

fn default_gh() -> String {
    "gh".to_string()
}

fn default_clean_command() -> String {
    "rm -rf dist/ build/ *.egg-info".to_string()
}

fn default_build_command() -> String {
    "python -m build".to_string()
}

fn default_upload_command() -> String {
    "twine upload dist/*".to_string()
}

/// Command lines for the external tools the release steps delegate to.
///
/// `git` and `gh` name programs that get arguments appended; the three
/// `*_command` fields are complete shell command lines run as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_git")]
    pub git: String,

    #[serde(default = "default_gh")]
    pub gh: String,

    #[serde(default = "default_clean_command")]
    pub clean_command: String,

    #[serde(default = "default_build_command")]
    pub build_command: String,

    #[serde(default = "default_upload_command")]
    pub upload_command: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            git: default_git(),
            gh: default_gh(),
            clean_command: default_clean_command(),
            build_command: default_build_command(),
            upload_command: default_upload_command(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            tools: ToolsConfig::default(),
            env: BTreeMap::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pypublish.toml` in the working directory
/// 3. `.pypublish.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let project_config = working_dir.join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if project_config.exists() {
        project_config
    } else if let Some(user_config) = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists())
    {
        user_config
    } else {
        log::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        PublishError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

/// Fully resolved settings for one run.
///
/// Operations receive this explicitly rather than consulting the process
/// working directory or environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Absolute directory every command runs in
    pub working_dir: PathBuf,
    /// Remote that tags are pushed to and deleted from
    pub remote: String,
    pub tools: ToolsConfig,
    pub env: BTreeMap<String, String>,
    /// Shell the runner hands command lines to; decides argument quoting
    pub shell: ShellFlavor,
}

impl ReleaseConfig {
    /// Builds a run configuration from a loaded file and a working directory.
    ///
    /// The working directory is canonicalized so its base name is always
    /// available, even when given as `.`.
    pub fn resolve(config: Config, working_dir: &Path) -> Result<Self> {
        let working_dir = fs::canonicalize(working_dir).map_err(|e| {
            PublishError::config(format!(
                "working directory {} is not accessible: {}",
                working_dir.display(),
                e
            ))
        })?;

        if !working_dir.is_dir() {
            return Err(PublishError::config(format!(
                "working directory {} is not a directory",
                working_dir.display()
            )));
        }

        Ok(ReleaseConfig {
            working_dir,
            remote: config.remote,
            tools: config.tools,
            env: config.env,
            shell: ShellFlavor::native(),
        })
    }

    /// Overrides the remote name, e.g. from `--remote`.
    pub fn with_remote(mut self, remote: Option<String>) -> Self {
        if let Some(remote) = remote {
            self.remote = remote;
        }
        self
    }

    /// Repository name derived from the working directory's base name.
    pub fn directory_name(&self) -> Result<String> {
        self.working_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PublishError::config(format!(
                    "cannot derive a repository name from {}",
                    self.working_dir.display()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.tools.git, "git");
        assert_eq!(config.tools.gh, "gh");
        assert_eq!(config.tools.clean_command, "rm -rf dist/ build/ *.egg-info");
        assert_eq!(config.tools.build_command, "python -m build");
        assert_eq!(config.tools.upload_command, "twine upload dist/*");
        assert!(config.env.is_empty());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[tools]
build_command = "uv build"
"#,
        )
        .unwrap();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.tools.build_command, "uv build");
        assert_eq!(config.tools.upload_command, "twine upload dist/*");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_with_remote_override() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ReleaseConfig::resolve(Config::default(), dir.path())
            .unwrap()
            .with_remote(Some("upstream".to_string()));
        assert_eq!(resolved.remote, "upstream");

        let resolved = resolved.with_remote(None);
        assert_eq!(resolved.remote, "upstream");
    }

    #[test]
    fn test_directory_name_from_dot() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("my-package");
        fs::create_dir(&project).unwrap();

        let resolved = ReleaseConfig::resolve(Config::default(), &project.join(".")).unwrap();
        assert_eq!(resolved.directory_name().unwrap(), "my-package");
    }

    #[test]
    fn test_resolve_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = ReleaseConfig::resolve(Config::default(), &missing).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_resolve_file_is_not_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("setup.py");
        fs::write(&file, "").unwrap();
        assert!(ReleaseConfig::resolve(Config::default(), &file).is_err());
    }
}
