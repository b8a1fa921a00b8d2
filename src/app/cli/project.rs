use crate::domain::AppError;

pub(super) fn run_create_project(project_name: &str) -> Result<(), AppError> {
    println!("Creating new project: {}", project_name);
    let outcome = crate::app::api::create_project(project_name)?;
    println!("✅ Project '{}' created successfully.", outcome.name);
    Ok(())
}
