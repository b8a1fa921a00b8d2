//! Create a new project directory tree.

use crate::app::AppContext;
use crate::domain::layout::{
    self, HOST_FRAMEWORK, MAIN_FILE, MODULE_MARKER, PLUGINS_DIR, REQUIREMENTS_FILE,
    SAMPLE_PLUGIN, SAMPLE_SERVICE, SERVICES_DIR,
};
use crate::domain::{AppError, Identifier, TemplateContext, TemplateKind};
use crate::ports::{ScaffoldFilesystem, TemplateStore};

use super::ProjectOutcome;

pub fn execute<F, T>(ctx: &AppContext<F, T>, name: &str) -> Result<ProjectOutcome, AppError>
where
    F: ScaffoldFilesystem,
    T: TemplateStore,
{
    let project = Identifier::new(name)?;
    let fs = ctx.filesystem();

    if fs.file_exists(project.as_str()) {
        return Err(AppError::ProjectExists(project.to_string()));
    }

    let plugin = Identifier::new(SAMPLE_PLUGIN)?;
    let service = Identifier::new(SAMPLE_SERVICE)?;

    // Render everything up front so a template failure leaves the disk untouched.
    let templates = ctx.templates();
    let main_content = templates.render(
        TemplateKind::MainEntryPoint,
        &TemplateContext::for_project(&project, &plugin, &service, HOST_FRAMEWORK),
    )?;
    let plugin_content =
        templates.render(TemplateKind::Plugin, &TemplateContext::for_identifier(&plugin))?;
    let service_content =
        templates.render(TemplateKind::Service, &TemplateContext::for_identifier(&service))?;
    let requirements_content = templates.render(
        TemplateKind::Requirements,
        &TemplateContext { host_framework: HOST_FRAMEWORK.to_string(), ..Default::default() },
    )?;

    let root = project.as_str();
    let plugins_dir = layout::join(root, PLUGINS_DIR);
    let services_dir = layout::join(root, SERVICES_DIR);
    let mut created = Vec::new();

    for dir in [root.to_string(), plugins_dir.clone(), services_dir.clone()] {
        fs.create_dir(&dir)?;
        created.push(dir);
    }

    let files = [
        (layout::join(root, MAIN_FILE), main_content),
        (layout::join(&plugins_dir, MODULE_MARKER), String::new()),
        (layout::join(&services_dir, MODULE_MARKER), String::new()),
        (layout::join(root, &layout::plugin_path(plugin.as_str())), plugin_content),
        (layout::join(root, &layout::service_path(service.as_str())), service_content),
        (layout::join(root, REQUIREMENTS_FILE), requirements_content),
    ];

    for (path, content) in files {
        fs.write_file(&path, &content)?;
        created.push(path);
    }

    Ok(ProjectOutcome { name: project.to_string(), created })
}
