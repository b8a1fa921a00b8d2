mod scaffold_filesystem;
mod template_store;

pub use scaffold_filesystem::ScaffoldFilesystem;
pub use template_store::TemplateStore;
