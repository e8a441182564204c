//! Interactive prompts
//!
//! The orchestrator only talks to [`UserInterface`]; the terminal front-end and
//! the fixed-answer implementation used by tests are interchangeable.

use crate::error::{DevhelperError, Result};
use crate::templates::TemplateId;
use async_trait::async_trait;
use dialoguer::{Input, Select};
use std::sync::Mutex;

pub const DEFAULT_PROJECT_NAME: &str = "my-project";

#[async_trait]
pub trait UserInterface: Send + Sync {
    async fn select_template(&self) -> Result<TemplateId>;
    async fn prompt_project_name(&self) -> Result<String>;
    async fn prompt_source_url(&self) -> Result<String>;
}

/// Terminal prompts backed by dialoguer.
pub struct DialoguerUi;

#[async_trait]
impl UserInterface for DialoguerUi {
    async fn select_template(&self) -> Result<TemplateId> {
        let labels: Vec<&str> = TemplateId::ALL.iter().map(|t| t.label()).collect();
        let selection = Select::new()
            .with_prompt("Which project do you want to create?")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(TemplateId::ALL[selection])
    }

    async fn prompt_project_name(&self) -> Result<String> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .interact_text()?;
        Ok(name)
    }

    async fn prompt_source_url(&self) -> Result<String> {
        let url: String = Input::new()
            .with_prompt("URL of the Git repository to clone")
            .interact_text()?;
        Ok(url)
    }
}

/// Fixed answers, consumed at most once each.
#[derive(Default)]
pub struct ScriptedUi {
    template: Mutex<Option<TemplateId>>,
    project_name: Mutex<Option<String>>,
    source_url: Mutex<Option<String>>,
}

impl ScriptedUi {
    pub fn new(template: TemplateId, project_name: impl Into<String>) -> Self {
        Self {
            template: Mutex::new(Some(template)),
            project_name: Mutex::new(Some(project_name.into())),
            source_url: Mutex::new(None),
        }
    }

    pub fn with_source_url(self, url: impl Into<String>) -> Self {
        *self.source_url.lock().unwrap_or_else(|e| e.into_inner()) = Some(url.into());
        self
    }

    /// True once the source URL answer has been consumed.
    pub fn source_url_taken(&self) -> bool {
        self.source_url
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_none()
    }

    fn take<T>(slot: &Mutex<Option<T>>, what: &str) -> Result<T> {
        slot.lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .ok_or_else(|| unanswered(what))
    }
}

fn unanswered(what: &str) -> DevhelperError {
    DevhelperError::Prompt(dialoguer::Error::IO(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        format!("no scripted answer for {what}"),
    )))
}

#[async_trait]
impl UserInterface for ScriptedUi {
    async fn select_template(&self) -> Result<TemplateId> {
        Self::take(&self.template, "template")
    }

    async fn prompt_project_name(&self) -> Result<String> {
        Self::take(&self.project_name, "project name")
    }

    async fn prompt_source_url(&self) -> Result<String> {
        Self::take(&self.source_url, "source URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_are_consumed_once() {
        let ui = ScriptedUi::new(TemplateId::StaticWeb, "demo");
        assert_eq!(ui.select_template().await.unwrap(), TemplateId::StaticWeb);
        assert_eq!(ui.prompt_project_name().await.unwrap(), "demo");
        assert!(matches!(
            ui.prompt_project_name().await,
            Err(DevhelperError::Prompt(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_source_url_is_prompt_error() {
        let ui = ScriptedUi::new(TemplateId::GitClone, "lib");
        assert!(ui.source_url_taken());
        assert!(ui.prompt_source_url().await.is_err());

        let ui = ScriptedUi::new(TemplateId::GitClone, "lib").with_source_url("https://x/y.git");
        assert!(!ui.source_url_taken());
        assert_eq!(ui.prompt_source_url().await.unwrap(), "https://x/y.git");
        assert!(ui.source_url_taken());
    }
}
