use crate::app::api::GenerateOutcome;
use crate::domain::AppError;

pub(super) fn run_generate_plugin(plugin_name: &str) -> Result<(), AppError> {
    println!("Generating plugin: {}", plugin_name);
    let outcome = crate::app::api::generate_plugin(plugin_name)?;
    report(&outcome);
    Ok(())
}

pub(super) fn run_generate_service(service_name: &str) -> Result<(), AppError> {
    println!("Generating service: {}", service_name);
    let outcome = crate::app::api::generate_service(service_name)?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &GenerateOutcome) {
    println!(
        "✅ {} '{}' generated successfully in '{}'.",
        outcome.entity_type(),
        outcome.name(),
        outcome.display_path()
    );
}
