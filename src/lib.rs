//! modular-quickstart: scaffold quickstart projects and generate plugin and service stubs.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    create_project, create_project_at, generate_plugin, generate_plugin_at, generate_service,
    generate_service_at,
};
pub use app::commands::{GenerateOutcome, ProjectOutcome};
pub use domain::{AppError, Identifier};
