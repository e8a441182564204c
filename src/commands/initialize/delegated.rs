use super::{InitContext, Outcome, ProjectInitializer, ProvisionState};

use crate::config::Toolchain;
use crate::error::{DevhelperError, ExitInfo, Result};
use crate::templates::TemplateId;
use crate::utils::{CommandSpec, execute_command_streaming};
use async_trait::async_trait;
use tracing::debug;

/// Hands provisioning to an external generator (`create-vite`, `cargo new`).
pub struct DelegatedProcessInitializer {
    template: TemplateId,
    toolchain: Toolchain,
}

impl DelegatedProcessInitializer {
    pub fn react_vite(toolchain: Toolchain) -> Self {
        Self {
            template: TemplateId::ReactVite,
            toolchain,
        }
    }

    pub fn rust_crate(toolchain: Toolchain) -> Self {
        Self {
            template: TemplateId::RustCrate,
            toolchain,
        }
    }

    /// Commands run in order from the working directory; the generator
    /// creates the project directory itself.
    pub fn commands(&self, context: &InitContext) -> Vec<CommandSpec> {
        let name = context.project_name.as_str();
        let cwd = &context.working_directory;
        match self.template {
            TemplateId::ReactVite => vec![CommandSpec::new(
                &self.toolchain.npx,
                ["create-vite@latest", name, "--template", "react"],
                cwd,
            )],
            _ => vec![CommandSpec::new(&self.toolchain.cargo, ["new", name], cwd)],
        }
    }

    fn next_steps(&self, context: &InitContext) -> Vec<String> {
        let enter = format!("cd {}", context.project_name);
        match self.template {
            TemplateId::ReactVite => vec![enter, "npm install".into(), "npm run dev".into()],
            _ => vec![enter, "cargo run".into()],
        }
    }

    async fn run(&self, context: &InitContext) -> Result<Outcome> {
        let mut state = ProvisionState::NotStarted;
        debug!("{} provisioning: {:?}", self.template, state);

        for spec in self.commands(context) {
            state = ProvisionState::Running;
            debug!("{} provisioning: {:?}", self.template, state);

            if let Err(status) = execute_command_streaming(&spec).await {
                debug!("{} provisioning: {:?}", self.template, ProvisionState::Failed);
                return Err(DevhelperError::ExternalCommandFailed {
                    command: spec.label(),
                    status,
                });
            }
        }

        if !context.target_dir.is_dir() {
            debug!("{} provisioning: {:?}", self.template, ProvisionState::Failed);
            return Err(DevhelperError::ExternalCommandFailed {
                command: self
                    .commands(context)
                    .last()
                    .map(CommandSpec::label)
                    .unwrap_or_default(),
                status: ExitInfo::MissingOutput(context.target_dir.clone()),
            });
        }

        state = ProvisionState::Succeeded;
        debug!("{} provisioning: {:?}", self.template, state);

        let kind = match self.template {
            TemplateId::ReactVite => "React",
            _ => "Rust",
        };
        Ok(Outcome::success(
            format!("{kind} project '{}' created successfully!", context.project_name),
            context,
        )
        .with_next_steps(self.next_steps(context)))
    }
}

#[async_trait]
impl ProjectInitializer for DelegatedProcessInitializer {
    fn template(&self) -> TemplateId {
        self.template
    }

    async fn provision(&self, context: &InitContext) -> Outcome {
        Outcome::from_result(self.run(context).await)
    }
}
