use super::{InitContext, Outcome, ProjectInitializer};

use crate::error::{DevhelperError, Result};
use crate::templates::{self, FileSet, TemplateId};
use async_trait::async_trait;
use tracing::{debug, info};

/// Writes a fixed set of files into a freshly created directory.
pub struct StaticFilesInitializer {
    template: TemplateId,
    files: FileSet,
}

impl StaticFilesInitializer {
    pub fn static_web() -> Self {
        Self {
            template: TemplateId::StaticWeb,
            files: templates::static_web_files(),
        }
    }

    pub fn node_minimal() -> Self {
        Self {
            template: TemplateId::NodeMinimal,
            files: templates::node_minimal_files(),
        }
    }

    fn write_files(&self, context: &InitContext) -> Result<()> {
        let target = &context.target_dir;

        info!("📁 Creating {}", target.display());
        std::fs::create_dir(target).map_err(|source| DevhelperError::DirectoryCreateFailed {
            path: target.clone(),
            source,
        })?;

        // Partial output stays on disk if a later write fails.
        for file in &self.files {
            let path = target.join(file.relative_path);
            if let Some(parent) = path.parent().filter(|p| *p != target.as_path()) {
                std::fs::create_dir_all(parent).map_err(|source| {
                    DevhelperError::FileWriteFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
            }
            std::fs::write(&path, file.contents)
                .map_err(|source| DevhelperError::FileWriteFailed { path: path.clone(), source })?;
            debug!("  created {}", file.relative_path);
        }

        Ok(())
    }

    fn next_steps(&self, context: &InitContext) -> Vec<String> {
        let enter = format!("cd {}", context.project_name);
        match self.template {
            TemplateId::StaticWeb => vec![enter, "open index.html in a browser".to_string()],
            _ => vec![enter, "node index.js".to_string()],
        }
    }
}

#[async_trait]
impl ProjectInitializer for StaticFilesInitializer {
    fn template(&self) -> TemplateId {
        self.template
    }

    async fn provision(&self, context: &InitContext) -> Outcome {
        Outcome::from_result(self.write_files(context).map(|()| {
            Outcome::success(
                format!("Project '{}' created successfully!", context.project_name),
                context,
            )
            .with_next_steps(self.next_steps(context))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(root: &TempDir, name: &str) -> InitContext {
        InitContext {
            project_name: name.to_string(),
            target_dir: root.path().join(name),
            working_directory: root.path().to_path_buf(),
            source_url: None,
        }
    }

    #[tokio::test]
    async fn test_node_minimal_writes_entry_script() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, "api");

        let outcome = StaticFilesInitializer::node_minimal().provision(&ctx).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.next_steps(), ["cd api", "node index.js"]);
        let script = std::fs::read_to_string(ctx.target_dir.join("index.js")).unwrap();
        assert_eq!(script, "console.log(\"Hello, Node!\");\n");
    }

    #[tokio::test]
    async fn test_existing_directory_fails_create() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, "site");
        std::fs::create_dir(&ctx.target_dir).unwrap();

        let outcome = StaticFilesInitializer::static_web().provision(&ctx).await;

        assert!(matches!(
            outcome.error(),
            Some(DevhelperError::DirectoryCreateFailed { .. })
        ));
        assert!(!ctx.target_dir.join("index.html").exists());
    }

    #[tokio::test]
    async fn test_first_write_error_aborts_remaining() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir, "site");
        let initializer = StaticFilesInitializer {
            template: TemplateId::StaticWeb,
            files: vec![
                templates::TemplateFile {
                    relative_path: "ok.txt",
                    contents: "ok",
                },
                // A path whose parent is a regular file cannot be written.
                templates::TemplateFile {
                    relative_path: "ok.txt/nested.txt",
                    contents: "nope",
                },
                templates::TemplateFile {
                    relative_path: "never.txt",
                    contents: "never",
                },
            ],
        };

        let outcome = initializer.provision(&ctx).await;

        match outcome.error() {
            Some(DevhelperError::FileWriteFailed { path, .. }) => {
                assert!(path.ends_with("ok.txt/nested.txt"));
            }
            other => panic!("expected write failure, got {other:?}"),
        }
        assert!(ctx.target_dir.join("ok.txt").exists());
        assert!(!ctx.target_dir.join("never.txt").exists());
    }
}
