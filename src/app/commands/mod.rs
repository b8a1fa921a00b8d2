//! Scaffold commands: project creation and stub generation.

pub mod create_project;
pub mod generate_plugin;
pub mod generate_service;

/// Outcome of a project creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub name: String,
    /// Created entries relative to the invocation root, in creation order.
    pub created: Vec<String>,
}

/// Outcome of a stub generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Plugin { name: String, path: String },
    Service { name: String, path: String },
}

impl GenerateOutcome {
    pub fn display_path(&self) -> &str {
        match self {
            GenerateOutcome::Plugin { path, .. } | GenerateOutcome::Service { path, .. } => path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GenerateOutcome::Plugin { name, .. } | GenerateOutcome::Service { name, .. } => name,
        }
    }

    pub fn entity_type(&self) -> &'static str {
        match self {
            GenerateOutcome::Plugin { .. } => "Plugin",
            GenerateOutcome::Service { .. } => "Service",
        }
    }
}
