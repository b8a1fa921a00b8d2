//! CLI Adapter.

mod generate;
mod project;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "modular-quickstart")]
#[command(version)]
#[command(about = "Generate quickstart projects, plugins, and services", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project directory with sample plugin and service
    #[clap(visible_alias = "cp")]
    CreateProject {
        /// Name of the project directory to create
        project_name: String,
    },
    /// Generate a boilerplate plugin in custom_plugins/
    #[clap(visible_alias = "gp")]
    GeneratePlugin {
        /// Plugin name, used as module name and route prefix
        plugin_name: String,
    },
    /// Generate a boilerplate service in custom_services/
    #[clap(visible_alias = "gs")]
    GenerateService {
        /// Service name, used as module name and registration key
        service_name: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::CreateProject { project_name } => project::run_create_project(&project_name),
        Commands::GeneratePlugin { plugin_name } => generate::run_generate_plugin(&plugin_name),
        Commands::GenerateService { service_name } => {
            generate::run_generate_service(&service_name)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
