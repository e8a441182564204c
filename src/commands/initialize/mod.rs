mod delegated;
mod git_clone;
mod static_files;
pub mod traits;

use crate::config::Toolchain;
use crate::error::Result;
use crate::templates::TemplateId;

pub use delegated::DelegatedProcessInitializer;
pub use git_clone::{GitCloneInitializer, MANIFEST_FILE};
pub use static_files::StaticFilesInitializer;
pub use traits::{InitContext, Outcome, ProjectInitializer, ProvisionState};

/// Maps every template id to the strategy that provisions it.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    toolchain: Toolchain,
}

impl TemplateRegistry {
    pub fn with_toolchain(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }

    pub fn templates(&self) -> &'static [TemplateId] {
        &TemplateId::ALL
    }

    pub fn lookup(&self, template: TemplateId) -> Result<Box<dyn ProjectInitializer>> {
        let toolchain = self.toolchain.clone();
        let strategy: Box<dyn ProjectInitializer> = match template {
            TemplateId::StaticWeb => Box::new(StaticFilesInitializer::static_web()),
            TemplateId::NodeMinimal => Box::new(StaticFilesInitializer::node_minimal()),
            TemplateId::ReactVite => Box::new(DelegatedProcessInitializer::react_vite(toolchain)),
            TemplateId::RustCrate => Box::new(DelegatedProcessInitializer::rust_crate(toolchain)),
            TemplateId::GitClone => Box::new(GitCloneInitializer::new(toolchain)),
        };
        Ok(strategy)
    }

    /// Look up a template by its identifier, e.g. `static-web`.
    pub fn lookup_name(&self, name: &str) -> Result<Box<dyn ProjectInitializer>> {
        self.lookup(name.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevhelperError;

    #[test]
    fn test_every_template_has_a_strategy() {
        let registry = TemplateRegistry::default();
        for &template in registry.templates() {
            let strategy = registry.lookup(template).unwrap();
            assert_eq!(strategy.template(), template);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = TemplateRegistry::default();
        let strategy = registry.lookup_name("rust-crate").unwrap();
        assert_eq!(strategy.template(), TemplateId::RustCrate);

        match registry.lookup_name("angular") {
            Err(DevhelperError::UnknownTemplate { name }) => assert_eq!(name, "angular"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("unknown template resolved"),
        }
    }
}
