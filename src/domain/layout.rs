//! Path catalog for generated quickstart projects.

/// Directory holding plugin modules.
pub const PLUGINS_DIR: &str = "custom_plugins";
/// Directory holding service modules.
pub const SERVICES_DIR: &str = "custom_services";
/// Empty marker that makes a directory importable by the host framework.
pub const MODULE_MARKER: &str = "__init__.py";
/// Application entry point at the project root.
pub const MAIN_FILE: &str = "main.py";
/// Dependency manifest at the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
/// Extension of generated source files.
pub const SOURCE_EXTENSION: &str = "py";

/// Identifier of the plugin seeded into new projects.
pub const SAMPLE_PLUGIN: &str = "my_custom_plugin";
/// Identifier of the service seeded into new projects.
pub const SAMPLE_SERVICE: &str = "my_custom_service";

/// Package name of the host framework listed in the dependency manifest.
pub const HOST_FRAMEWORK: &str = "quickstart";

/// Join relative path segments with `/`.
pub fn join(base: &str, child: &str) -> String {
    format!("{}/{}", base, child)
}

/// Relative path of a plugin module inside a project, e.g. `custom_plugins/auth.py`.
pub fn plugin_path(name: &str) -> String {
    join(PLUGINS_DIR, &format!("{}.{}", name, SOURCE_EXTENSION))
}

/// Relative path of a service module inside a project.
pub fn service_path(name: &str) -> String {
    join(SERVICES_DIR, &format!("{}.{}", name, SOURCE_EXTENSION))
}
