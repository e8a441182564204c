//! Project templates

mod node;
mod static_web;

use crate::error::DevhelperError;
use std::fmt;
use std::str::FromStr;

/// Every template devhelper can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ReactVite,
    NodeMinimal,
    StaticWeb,
    RustCrate,
    GitClone,
}

impl TemplateId {
    /// Prompt order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::ReactVite,
        TemplateId::NodeMinimal,
        TemplateId::StaticWeb,
        TemplateId::RustCrate,
        TemplateId::GitClone,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateId::ReactVite => "react-vite",
            TemplateId::NodeMinimal => "node-minimal",
            TemplateId::StaticWeb => "static-web",
            TemplateId::RustCrate => "rust-crate",
            TemplateId::GitClone => "git-clone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateId::ReactVite => "React (Vite)",
            TemplateId::NodeMinimal => "Node",
            TemplateId::StaticWeb => "HTML + CSS + JS",
            TemplateId::RustCrate => "Rust",
            TemplateId::GitClone => "Clone a Git repository",
        }
    }

    /// Whether provisioning needs a source URL from the user.
    pub fn needs_source_url(self) -> bool {
        matches!(self, TemplateId::GitClone)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateId {
    type Err = DevhelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DevhelperError::UnknownTemplate {
                name: s.to_string(),
            })
    }
}

/// A file written verbatim into a new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub relative_path: &'static str,
    pub contents: &'static str,
}

/// Ordered set of files; written in order after the project directory exists.
pub type FileSet = Vec<TemplateFile>;

pub fn static_web_files() -> FileSet {
    static_web::files()
}

pub fn node_minimal_files() -> FileSet {
    node::files()
}
