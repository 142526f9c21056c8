//! Configuration module for ignorepick
//!
//! Settings are resolved once at startup and passed explicitly to the
//! collaborators that need them. Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the user's config directory
//!    (`~/.config/ignorepick/config.toml` on Linux), if present
//! 3. `IGNOREPICK_*` environment variables (e.g. `IGNOREPICK_REPO_DIR`)
//! 4. command-line flags, applied with [`AppConfig::with_overrides`]
//!
//! The file is only ever read; ignorepick does not write configuration.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reference repository cloned on first use
pub const DEFAULT_REPO_URL: &str = "https://github.com/github/gitignore.git";

/// Template file name glob
pub const DEFAULT_PATTERN: &str = "*.gitignore";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "IGNOREPICK";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Git URL of the template repository
    pub repo_url: String,

    /// Local clone of the template repository
    pub repo_dir: PathBuf,

    /// Glob matched against file names inside `repo_dir`
    pub pattern: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

/// Values given on the command line; `None` keeps the loaded setting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub repo_url: Option<String>,
    pub repo_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub quiet: bool,
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("ignorepick").join("config.toml"))
    }

    /// Default clone location: `~/gitignore`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the home directory cannot be determined.
    pub fn default_repo_dir() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join("gitignore"))
            .ok_or_else(|| ConfigError::Message("Could not determine home directory".to_string()))
    }

    /// Load configuration from defaults, the config file and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(Some(&config_path), Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an explicit file and environment source
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or holds invalid values.
    pub fn load_from(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let default_repo_dir = Self::default_repo_dir()?;

        let mut builder = Config::builder()
            .set_default("repo_url", DEFAULT_REPO_URL)?
            .set_default("repo_dir", default_repo_dir.to_string_lossy().into_owned())?
            .set_default("pattern", DEFAULT_PATTERN)?
            .set_default("quiet", false)?;

        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder.add_source(env).build()?.try_deserialize()
    }

    /// Apply command-line values on top of the loaded settings
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.repo_url {
            self.repo_url = url;
        }
        if let Some(dir) = overrides.repo_dir {
            self.repo_dir = dir;
        }
        if let Some(pattern) = overrides.pattern {
            self.pattern = pattern;
        }
        self.quiet = self.quiet || overrides.quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::load_from(None, no_env()).unwrap();

        assert_eq!(config.repo_url, DEFAULT_REPO_URL);
        assert_eq!(config.repo_dir, AppConfig::default_repo_dir().unwrap());
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = AppConfig::load_from(Some(&path), no_env()).unwrap();
        assert_eq!(config.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "repo_dir = \"/srv/templates\"\nquiet = true\n").unwrap();

        let config = AppConfig::load_from(Some(&path), no_env()).unwrap();
        assert_eq!(config.repo_dir, PathBuf::from("/srv/templates"));
        assert!(config.quiet);
        assert_eq!(config.repo_url, DEFAULT_REPO_URL);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pattern = \"*.ignore\"\n").unwrap();

        let config = AppConfig::load_from(
            Some(&path),
            env(&[
                ("IGNOREPICK_PATTERN", "*.txt"),
                ("IGNOREPICK_REPO_URL", "https://example.com/t.git"),
            ]),
        )
        .unwrap();

        assert_eq!(config.pattern, "*.txt");
        assert_eq!(config.repo_url, "https://example.com/t.git");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "repo_dir = [").unwrap();

        assert!(AppConfig::load_from(Some(&path), no_env()).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let config = AppConfig::load_from(None, no_env()).unwrap();

        let config = config.with_overrides(Overrides {
            repo_dir: Some(PathBuf::from("/tmp/gi")),
            quiet: true,
            ..Overrides::default()
        });

        assert_eq!(config.repo_dir, PathBuf::from("/tmp/gi"));
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert!(config.quiet);
    }
}
