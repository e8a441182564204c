//! External toolchain configuration
//!
//! The programs devhelper delegates to can be renamed through an optional TOML
//! file. The file is only read, never written.
//!
//! ```toml
//! [toolchain]
//! git = "/usr/local/bin/git"
//! npm = "pnpm"
//! ```

use crate::error::{DevhelperError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "DEVHELPER_CONFIG";

const CONFIG_DIR: &str = "devhelper";
const CONFIG_FILE: &str = "config.toml";

#[cfg(windows)]
const NPX: &str = "npx.cmd";
#[cfg(not(windows))]
const NPX: &str = "npx";

#[cfg(windows)]
const NPM: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM: &str = "npm";

/// Program names for every external tool a template may invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub npx: String,
    pub cargo: String,
    pub git: String,
    pub npm: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npx: NPX.to_string(),
            cargo: "cargo".to_string(),
            git: "git".to_string(),
            npm: NPM.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    toolchain: ToolchainOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToolchainOverrides {
    npx: Option<String>,
    cargo: Option<String>,
    git: Option<String>,
    npm: Option<String>,
}

impl Toolchain {
    /// Load the toolchain from `$DEVHELPER_CONFIG`, then the user config
    /// directory, falling back to defaults when neither exists.
    pub fn load() -> Result<Self> {
        Self::load_from(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            default_config_path(),
        )
    }

    /// An explicit path must be readable; the fallback is used only if it exists.
    pub fn load_from(explicit: Option<PathBuf>, fallback: Option<PathBuf>) -> Result<Self> {
        if let Some(explicit) = explicit {
            return Self::from_file(&explicit);
        }

        match fallback {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No devhelper config found, using default toolchain");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading toolchain config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| DevhelperError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| DevhelperError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
        let overrides = file.toolchain;
        let defaults = Self::default();

        let pick = |value: Option<String>, fallback: String, key: &str| match value {
            Some(v) if v.trim().is_empty() => Err(format!("toolchain.{key} cannot be empty")),
            Some(v) => Ok(v),
            None => Ok(fallback),
        };

        Ok(Self {
            npx: pick(overrides.npx, defaults.npx, "npx")?,
            cargo: pick(overrides.cargo, defaults.cargo, "cargo")?,
            git: pick(overrides.git, defaults.git, "git")?,
            npm: pick(overrides.npm, defaults.npm, "npm")?,
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let toolchain = Toolchain::from_toml("[toolchain]\nnpm = \"pnpm\"\n").unwrap();
        assert_eq!(toolchain.npm, "pnpm");
        assert_eq!(toolchain.git, "git");
        assert_eq!(toolchain.cargo, "cargo");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Toolchain::from_toml("").unwrap(), Toolchain::default());
    }

    #[test]
    fn test_rejects_blank_and_unknown_keys() {
        let err = Toolchain::from_toml("[toolchain]\ngit = \"  \"\n").unwrap_err();
        assert!(err.contains("toolchain.git"));

        assert!(Toolchain::from_toml("[toolchain]\nyarn = \"yarn\"\n").is_err());
    }

    #[test]
    fn test_explicit_path_wins_over_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit.toml");
        let fallback = temp_dir.path().join("fallback.toml");
        std::fs::write(&explicit, "[toolchain]\ngit = \"git-explicit\"\n").unwrap();
        std::fs::write(&fallback, "[toolchain]\ngit = \"git-fallback\"\n").unwrap();

        let toolchain = Toolchain::load_from(Some(explicit), Some(fallback.clone())).unwrap();
        assert_eq!(toolchain.git, "git-explicit");

        let toolchain = Toolchain::load_from(None, Some(fallback)).unwrap();
        assert_eq!(toolchain.git, "git-fallback");
    }

    #[test]
    fn test_missing_fallback_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let absent = temp_dir.path().join("devhelper/config.toml");

        assert_eq!(
            Toolchain::load_from(None, Some(absent)).unwrap(),
            Toolchain::default()
        );
        assert_eq!(Toolchain::load_from(None, None).unwrap(), Toolchain::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let absent = temp_dir.path().join("nope.toml");

        assert!(matches!(
            Toolchain::load_from(Some(absent), None),
            Err(DevhelperError::Config { .. })
        ));
    }

    #[test]
    fn test_from_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain\n").unwrap();

        match Toolchain::from_file(&path) {
            Err(DevhelperError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
