use super::{InitContext, Outcome, ProjectInitializer, ProvisionState};

use crate::config::Toolchain;
use crate::error::{DevhelperError, ExitInfo, Result};
use crate::templates::TemplateId;
use crate::utils::{CommandSpec, execute_command_streaming, resolve_target, target_exists};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Dependency manifest that triggers the install step after cloning.
pub const MANIFEST_FILE: &str = "package.json";

/// Clones a repository, then installs its dependencies when it ships a manifest.
pub struct GitCloneInitializer {
    toolchain: Toolchain,
}

impl GitCloneInitializer {
    pub fn new(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }

    fn clone_command(&self, url: &str, context: &InitContext) -> CommandSpec {
        CommandSpec::new(
            &self.toolchain.git,
            [
                "clone".to_string(),
                // Keeps a URL starting with '-' from being read as an option.
                "--".to_string(),
                url.to_string(),
                context.target_dir.to_string_lossy().into_owned(),
            ],
            &context.working_directory,
        )
    }

    fn install_command(&self, context: &InitContext) -> CommandSpec {
        CommandSpec::new(&self.toolchain.npm, ["install"], &context.target_dir)
    }

    async fn run(&self, context: &InitContext) -> Result<Outcome> {
        let url = context
            .source_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(DevhelperError::InvalidSourceUrl)?;

        // The URL prompt happens after the orchestrator's check, so look again.
        let target = resolve_target(&context.working_directory, &context.project_name);
        if target_exists(&target) {
            return Err(DevhelperError::TargetExists { path: target });
        }

        info!("📥 Cloning {} into {}", url, context.target_dir.display());
        let mut state = ProvisionState::CloneRunning;
        debug!("git-clone provisioning: {:?}", state);

        let clone = self.clone_command(url, context);
        execute_command_streaming(&clone)
            .await
            .map_err(|status| DevhelperError::ExternalCommandFailed {
                command: clone.label(),
                status,
            })?;

        if !context.target_dir.is_dir() {
            debug!("git-clone provisioning: {:?}", ProvisionState::Failed);
            return Err(DevhelperError::ExternalCommandFailed {
                command: clone.label(),
                status: ExitInfo::MissingOutput(context.target_dir.clone()),
            });
        }

        state = ProvisionState::CloneSucceeded;
        debug!("git-clone provisioning: {:?}", state);

        let mut outcome = Outcome::success(
            format!(
                "Repository cloned successfully into {}",
                context.target_dir.display()
            ),
            context,
        )
        .with_next_steps([format!("cd {}", context.project_name)]);

        state = ProvisionState::InstallCheck;
        debug!("git-clone provisioning: {:?}", state);

        if !context.target_dir.join(MANIFEST_FILE).is_file() {
            state = ProvisionState::InstallSkipped;
            debug!("git-clone provisioning: {:?} (no {})", state, MANIFEST_FILE);
            return Ok(outcome);
        }

        info!("📦 Installing dependencies...");
        state = ProvisionState::InstallRunning;
        debug!("git-clone provisioning: {:?}", state);

        let install = self.install_command(context);
        match execute_command_streaming(&install).await {
            Ok(()) => {
                state = ProvisionState::InstallSucceeded;
                info!("✅ Dependencies installed");
            }
            Err(status) => {
                state = ProvisionState::InstallFailed;
                let warning = DevhelperError::SecondaryStepFailed {
                    command: install.label(),
                    status,
                };
                warn!("{warning}");
                outcome = outcome.with_warning(warning);
            }
        }
        debug!("git-clone provisioning: {:?}", state);

        Ok(outcome)
    }
}

#[async_trait]
impl ProjectInitializer for GitCloneInitializer {
    fn template(&self) -> TemplateId {
        TemplateId::GitClone
    }

    async fn provision(&self, context: &InitContext) -> Outcome {
        Outcome::from_result(self.run(context).await)
    }
}
