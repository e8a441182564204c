//! Error types for devhelper
//!
//! Every failure a provisioning run can hit is one of these variants. Strategies
//! convert them into an [`Outcome::Failure`](crate::commands::initialize::Outcome)
//! at their boundary, so none of them escape past the orchestrator.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// How an external command ended when it did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitInfo {
    /// The process could not be started at all.
    Spawn(String),
    /// The process exited with a non-zero code.
    Code(i32),
    /// The process was terminated without an exit code.
    Signal,
    /// The process exited cleanly but did not produce the expected directory.
    MissingOutput(PathBuf),
}

impl ExitInfo {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Code(code),
            None => Self::Signal,
        }
    }
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(reason) => write!(f, "could not be started: {reason}"),
            Self::Code(code) => write!(f, "exited with code {code}"),
            Self::Signal => write!(f, "was terminated by a signal"),
            Self::MissingOutput(path) => {
                write!(f, "finished but did not create {}", path.display())
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum DevhelperError {
    // === Pre-flight ===
    #[error("Target directory already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Repository URL cannot be empty")]
    InvalidSourceUrl,

    // === Provisioning ===
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' {status}")]
    ExternalCommandFailed { command: String, status: ExitInfo },

    #[error("Optional step '{command}' {status}")]
    SecondaryStepFailed { command: String, status: ExitInfo },

    // === Environment ===
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl DevhelperError {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Failures that happen before anything on disk is touched.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::TargetExists { .. }
                | Self::UnknownTemplate { .. }
                | Self::InvalidProjectName { .. }
                | Self::InvalidSourceUrl
        )
    }

    /// Get a user-friendly hint for this error
    pub fn user_hint(&self) -> Option<&str> {
        match self {
            Self::TargetExists { .. } => {
                Some("💡 Choose a different project name or remove the existing directory")
            }
            Self::UnknownTemplate { .. } => Some(
                "💡 Available templates: react-vite, node-minimal, static-web, rust-crate, \
                 git-clone",
            ),
            Self::InvalidProjectName { .. } => Some(
                "💡 Use letters, digits, '-', '_' or '.', and do not start with '-' or '.'",
            ),
            Self::InvalidSourceUrl => Some("💡 Enter a URL or path that `git clone` accepts"),
            Self::ExternalCommandFailed {
                status: ExitInfo::Spawn(_),
                ..
            } => Some("💡 Make sure the required tool is installed and on your PATH"),
            Self::SecondaryStepFailed { .. } => {
                Some("💡 Run the install step again inside the project directory")
            }
            Self::Config { .. } => {
                Some("💡 Check the [toolchain] table in your devhelper config")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevhelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_info_display() {
        assert_eq!(ExitInfo::Code(128).to_string(), "exited with code 128");
        assert_eq!(
            ExitInfo::Spawn("No such file or directory".into()).to_string(),
            "could not be started: No such file or directory"
        );
    }

    #[test]
    fn test_spawn_failures_get_install_hint() {
        let err = DevhelperError::ExternalCommandFailed {
            command: "cargo new".into(),
            status: ExitInfo::Spawn("not found".into()),
        };
        assert!(err.user_hint().unwrap().contains("PATH"));

        let err = DevhelperError::ExternalCommandFailed {
            command: "cargo new".into(),
            status: ExitInfo::Code(101),
        };
        assert!(err.user_hint().is_none());
        assert_eq!(err.to_string(), "Command 'cargo new' exited with code 101");
    }

    #[test]
    fn test_preflight_classification() {
        assert!(DevhelperError::TargetExists { path: "demo".into() }.is_preflight());
        assert!(!DevhelperError::SecondaryStepFailed {
            command: "npm install".into(),
            status: ExitInfo::Code(1),
        }
        .is_preflight());
    }
}
