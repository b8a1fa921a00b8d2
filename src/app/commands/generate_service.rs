//! Generate a service stub under `custom_services/`.

use crate::app::AppContext;
use crate::domain::layout::{self, SERVICES_DIR};
use crate::domain::{AppError, Identifier, TemplateContext, TemplateKind};
use crate::ports::{ScaffoldFilesystem, TemplateStore};

use super::GenerateOutcome;

pub fn execute<F, T>(ctx: &AppContext<F, T>, name: &str) -> Result<GenerateOutcome, AppError>
where
    F: ScaffoldFilesystem,
    T: TemplateStore,
{
    let service = Identifier::new(name)?;
    let fs = ctx.filesystem();

    if !fs.is_dir(SERVICES_DIR) {
        return Err(AppError::MissingDirectory(SERVICES_DIR.to_string()));
    }

    let path = layout::service_path(service.as_str());
    if fs.file_exists(&path) {
        return Err(AppError::ServiceExists(service.to_string()));
    }

    let content = ctx
        .templates()
        .render(TemplateKind::Service, &TemplateContext::for_identifier(&service))?;
    fs.write_file(&path, &content)?;

    Ok(GenerateOutcome::Service { name: service.to_string(), path })
}
