//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::embedded_template_store::EmbeddedTemplateStore;
use crate::adapters::filesystem::FilesystemStore;
use crate::app::{AppContext, commands};

pub use crate::app::commands::{GenerateOutcome, ProjectOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` rooted at a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemStore, EmbeddedTemplateStore> {
    AppContext::new(FilesystemStore::new(path), EmbeddedTemplateStore::new())
}

// =============================================================================
// Project API
// =============================================================================

/// Create a new project directory `<name>/` in the current directory.
pub fn create_project(name: &str) -> Result<ProjectOutcome, AppError> {
    create_project_at(name, std::env::current_dir()?)
}

/// Create a new project directory `<name>/` under `root`.
pub fn create_project_at(name: &str, root: impl Into<PathBuf>) -> Result<ProjectOutcome, AppError> {
    let ctx = create_context(root.into());
    commands::create_project::execute(&ctx, name)
}

// =============================================================================
// Generate API
// =============================================================================

/// Generate `custom_plugins/<name>.py` in the current project directory.
pub fn generate_plugin(name: &str) -> Result<GenerateOutcome, AppError> {
    generate_plugin_at(name, std::env::current_dir()?)
}

/// Generate `custom_plugins/<name>.py` in the project rooted at `root`.
pub fn generate_plugin_at(
    name: &str,
    root: impl Into<PathBuf>,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(root.into());
    commands::generate_plugin::execute(&ctx, name)
}

/// Generate `custom_services/<name>.py` in the current project directory.
pub fn generate_service(name: &str) -> Result<GenerateOutcome, AppError> {
    generate_service_at(name, std::env::current_dir()?)
}

/// Generate `custom_services/<name>.py` in the project rooted at `root`.
pub fn generate_service_at(
    name: &str,
    root: impl Into<PathBuf>,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(root.into());
    commands::generate_service::execute(&ctx, name)
}
