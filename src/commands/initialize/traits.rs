use crate::error::{DevhelperError, Result};
use crate::templates::TemplateId;
use async_trait::async_trait;
use std::path::PathBuf;

/// Everything a strategy needs to provision one project.
#[derive(Debug, Clone)]
pub struct InitContext {
    pub project_name: String,
    pub target_dir: PathBuf,
    pub working_directory: PathBuf,
    /// Only set for templates that clone from a remote.
    pub source_url: Option<String>,
}

/// Result of one provisioning run, consumed by the reporter.
#[derive(Debug)]
pub enum Outcome {
    Success {
        message: String,
        target_dir: PathBuf,
        next_steps: Vec<String>,
        /// Optional steps that failed without undoing the primary result.
        warnings: Vec<DevhelperError>,
    },
    Failure(DevhelperError),
}

impl Outcome {
    pub fn success(message: impl Into<String>, context: &InitContext) -> Self {
        Self::Success {
            message: message.into(),
            target_dir: context.target_dir.clone(),
            next_steps: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_next_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::Success { next_steps, .. } = &mut self {
            next_steps.extend(steps.into_iter().map(Into::into));
        }
        self
    }

    pub fn with_warning(mut self, warning: DevhelperError) -> Self {
        if let Self::Success { warnings, .. } = &mut self {
            warnings.push(warning);
        }
        self
    }

    /// Collapse a fallible provisioning body into an outcome.
    pub fn from_result(result: Result<Outcome>) -> Self {
        result.unwrap_or_else(Outcome::Failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn error(&self) -> Option<&DevhelperError> {
        match self {
            Self::Failure(e) => Some(e),
            Self::Success { .. } => None,
        }
    }

    pub fn warnings(&self) -> &[DevhelperError] {
        match self {
            Self::Success { warnings, .. } => warnings,
            Self::Failure(_) => &[],
        }
    }

    pub fn next_steps(&self) -> &[String] {
        match self {
            Self::Success { next_steps, .. } => next_steps,
            Self::Failure(_) => &[],
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Progress of a delegated provisioning run.
///
/// Generators move `NotStarted -> Running -> Succeeded | Failed`. Clones move
/// `CloneRunning -> CloneSucceeded -> InstallCheck`, then either
/// `InstallSkipped` or `InstallRunning -> InstallSucceeded | InstallFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionState {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    CloneRunning,
    CloneSucceeded,
    InstallCheck,
    InstallRunning,
    InstallSucceeded,
    InstallFailed,
    InstallSkipped,
}

/// A provisioning strategy bound to one template.
///
/// Implementations populate `context.target_dir`, which the caller has checked
/// does not exist yet. Errors never escape; they are returned as
/// [`Outcome::Failure`].
#[async_trait]
pub trait ProjectInitializer: Send + Sync {
    fn template(&self) -> TemplateId;
    async fn provision(&self, context: &InitContext) -> Outcome;
}
