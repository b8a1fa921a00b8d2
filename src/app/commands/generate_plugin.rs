//! Generate a plugin stub under `custom_plugins/`.

use crate::app::AppContext;
use crate::domain::layout::{self, PLUGINS_DIR};
use crate::domain::{AppError, Identifier, TemplateContext, TemplateKind};
use crate::ports::{ScaffoldFilesystem, TemplateStore};

use super::GenerateOutcome;

pub fn execute<F, T>(ctx: &AppContext<F, T>, name: &str) -> Result<GenerateOutcome, AppError>
where
    F: ScaffoldFilesystem,
    T: TemplateStore,
{
    let plugin = Identifier::new(name)?;
    let fs = ctx.filesystem();

    if !fs.is_dir(PLUGINS_DIR) {
        return Err(AppError::MissingDirectory(PLUGINS_DIR.to_string()));
    }

    let path = layout::plugin_path(plugin.as_str());
    if fs.file_exists(&path) {
        return Err(AppError::PluginExists(plugin.to_string()));
    }

    let content =
        ctx.templates().render(TemplateKind::Plugin, &TemplateContext::for_identifier(&plugin))?;
    fs.write_file(&path, &content)?;

    Ok(GenerateOutcome::Plugin { name: plugin.to_string(), path })
}
