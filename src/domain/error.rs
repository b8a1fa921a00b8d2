use std::io;

use thiserror::Error;

/// Library-wide error type for modular-quickstart operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Identifier argument was empty.
    #[error("Name must not be empty")]
    EmptyIdentifier,

    /// Project directory already exists at the target location.
    #[error("Directory '{0}' already exists.")]
    ProjectExists(String),

    /// Plugin file already exists in `custom_plugins/`.
    #[error("Plugin '{0}' already exists.")]
    PluginExists(String),

    /// Service file already exists in `custom_services/`.
    #[error("Service '{0}' already exists.")]
    ServiceExists(String),

    /// Command was run outside a project directory.
    #[error(
        "'{0}' directory does not exist. Please run this command inside your project directory."
    )]
    MissingDirectory(String),

    /// No embedded template registered under the requested name.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template uses syntax outside plain variable substitution.
    #[error("Template '{template}' uses disallowed syntax '{token}'")]
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::EmptyIdentifier => io::ErrorKind::InvalidInput,
            AppError::ProjectExists(_) | AppError::PluginExists(_) | AppError::ServiceExists(_) => {
                io::ErrorKind::AlreadyExists
            }
            AppError::MissingDirectory(_) | AppError::TemplateNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::TemplateSyntaxNotAllowed { .. } | AppError::TemplateRender { .. } => {
                io::ErrorKind::InvalidData
            }
        }
    }
}
