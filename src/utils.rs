//! Utility functions for devhelper

use crate::error::ExitInfo;
use std::path::{Path, PathBuf};
use tokio::process::Command as TokioCommand;
use tracing::{debug, info};

/// Compute the directory a project named `project_name` will occupy.
pub fn resolve_target(working_directory: &Path, project_name: &str) -> PathBuf {
    working_directory.join(project_name)
}

/// True if anything (directory, file or dangling symlink) sits at `path`.
pub fn target_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// One external command invocation. Stdio is always inherited so the user
/// sees the tool's own progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// Short name used in failure reports, e.g. `git clone` or `cargo new`.
    pub fn label(&self) -> String {
        let program = Path::new(&self.program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.program);
        match self.args.first() {
            Some(first) => format!("{program} {first}"),
            None => program.to_string(),
        }
    }

    /// Full command line for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Execute a command with inherited stdio and wait for it to exit.
pub async fn execute_command_streaming(spec: &CommandSpec) -> Result<(), ExitInfo> {
    info!("Running: {}", spec.display());
    debug!("Working directory: {}", spec.cwd.display());

    let status = TokioCommand::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .status()
        .await
        .map_err(|e| ExitInfo::Spawn(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ExitInfo::from_status(status))
    }
}
