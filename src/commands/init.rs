//! Project initialization command

use crate::commands::initialize::{InitContext, Outcome, TemplateRegistry};
use crate::config::Toolchain;
use crate::error::{DevhelperError, Result};
use crate::report::OutcomeReporter;
use crate::templates::TemplateId;
use crate::ui::UserInterface;
use crate::utils::{resolve_target, target_exists};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

/// Create a new project from a template. All parameters are asked interactively.
#[derive(Args, Debug, Default)]
pub struct InitCommand {}

impl InitCommand {
    /// Gather answers, provision, print the banner and hand back the outcome.
    pub async fn execute(&self, ui: &dyn UserInterface) -> Outcome {
        println!("🧩 devhelper - project assistant");
        println!("----------------------------------------");

        let outcome = match Toolchain::load() {
            Ok(toolchain) => {
                let registry = TemplateRegistry::with_toolchain(toolchain);
                Outcome::from_result(self.gather_and_run(ui, &registry).await)
            }
            Err(e) => Outcome::Failure(e),
        };

        OutcomeReporter::print(&outcome);
        outcome
    }

    async fn gather_and_run(
        &self,
        ui: &dyn UserInterface,
        registry: &TemplateRegistry,
    ) -> Result<Outcome> {
        let template = ui.select_template().await?;
        let project_name = ui.prompt_project_name().await?;
        let working_directory = std::env::current_dir().map_err(|e| DevhelperError::Config {
            path: PathBuf::from("."),
            message: format!("Failed to resolve current directory: {e}"),
        })?;

        let request = ProjectRequest::new(template, &project_name, working_directory)?;
        Ok(run_init(&request, ui, registry).await)
    }
}

/// One validated scaffolding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    template: TemplateId,
    project_name: String,
    working_directory: PathBuf,
}

impl ProjectRequest {
    pub fn new(
        template: TemplateId,
        project_name: &str,
        working_directory: impl Into<PathBuf>,
    ) -> Result<Self> {
        let project_name = project_name.trim();
        validate_project_name(project_name)?;
        Ok(Self {
            template,
            project_name: project_name.to_string(),
            working_directory: working_directory.into(),
        })
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn working_directory(&self) -> &PathBuf {
        &self.working_directory
    }
}

/// Validate a project name so the target stays a direct child of the working
/// directory.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DevhelperError::invalid_name(name, "name cannot be empty"));
    }

    if name == "." || name == ".." {
        return Err(DevhelperError::invalid_name(
            name,
            "name must not refer to an existing directory",
        ));
    }

    let is_valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !is_valid {
        return Err(DevhelperError::invalid_name(
            name,
            "only letters, digits, '-', '_' and '.' are allowed",
        ));
    }

    if name.starts_with('-') || name.starts_with('.') {
        return Err(DevhelperError::invalid_name(
            name,
            "name cannot start with '-' or '.'",
        ));
    }

    Ok(())
}

/// Provision `request`: collision check, strategy lookup, extra prompts, then
/// the strategy itself. Nothing on disk changes before the collision check.
pub async fn run_init(
    request: &ProjectRequest,
    ui: &dyn UserInterface,
    registry: &TemplateRegistry,
) -> Outcome {
    let target_dir = resolve_target(&request.working_directory, &request.project_name);
    if target_exists(&target_dir) {
        return Outcome::Failure(DevhelperError::TargetExists { path: target_dir });
    }

    let strategy = match registry.lookup(request.template) {
        Ok(strategy) => strategy,
        Err(e) => return Outcome::Failure(e),
    };

    let source_url = if request.template.needs_source_url() {
        match ui.prompt_source_url().await {
            Ok(url) => Some(url),
            Err(e) => return Outcome::Failure(e),
        }
    } else {
        None
    };

    info!(
        "🚀 Initializing {} project '{}'",
        request.template.label(),
        request.project_name
    );
    debug!("Target directory: {}", target_dir.display());

    let context = InitContext {
        project_name: request.project_name.clone(),
        target_dir,
        working_directory: request.working_directory.clone(),
        source_url,
    };
    strategy.provision(&context).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_names() {
        for name in ["demo", "my-app", "my_app", "app.v2", "App2"] {
            assert!(validate_project_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_project_names() {
        for name in ["", ".", "..", "-demo", ".hidden", "a/b", "a\\b", "my app", "../up"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(DevhelperError::InvalidProjectName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_trims_name() {
        let request = ProjectRequest::new(TemplateId::StaticWeb, "  demo \n", "/work").unwrap();
        assert_eq!(request.project_name(), "demo");
        assert_eq!(request.working_directory(), &PathBuf::from("/work"));
        assert_eq!(request.template(), TemplateId::StaticWeb);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(ProjectRequest::new(TemplateId::NodeMinimal, "   ", "/work").is_err());
    }
}
