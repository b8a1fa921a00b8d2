use serde::Serialize;

use super::Identifier;

/// The fixed set of templates the generator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    MainEntryPoint,
    Plugin,
    Service,
    Requirements,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::MainEntryPoint,
        TemplateKind::Plugin,
        TemplateKind::Service,
        TemplateKind::Requirements,
    ];

    /// Asset file name of the template.
    pub fn asset_name(self) -> &'static str {
        match self {
            TemplateKind::MainEntryPoint => "main.py.j2",
            TemplateKind::Plugin => "plugin.py.j2",
            TemplateKind::Service => "service.py.j2",
            TemplateKind::Requirements => "requirements.txt.j2",
        }
    }
}

/// Named substitution slots available to every template.
///
/// Slots a template does not use are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub project_name: String,
    pub name: String,
    pub capitalized: String,
    pub plugin_module: String,
    pub service_module: String,
    pub service_class: String,
    pub host_framework: String,
}

impl TemplateContext {
    /// Context for a plugin or service stub.
    pub fn for_identifier(id: &Identifier) -> Self {
        Self {
            name: id.as_str().to_string(),
            capitalized: id.capitalized(),
            ..Self::default()
        }
    }

    /// Context for the project entry point and manifest.
    ///
    /// The entry point wires in the seeded plugin and service, so their
    /// derived names are computed with the same rule as the stubs.
    pub fn for_project(
        project: &Identifier,
        plugin: &Identifier,
        service: &Identifier,
        host_framework: &str,
    ) -> Self {
        Self {
            project_name: project.as_str().to_string(),
            plugin_module: plugin.as_str().to_string(),
            service_module: service.as_str().to_string(),
            service_class: format!("{}Service", service.capitalized()),
            host_framework: host_framework.to_string(),
            ..Self::default()
        }
    }
}
