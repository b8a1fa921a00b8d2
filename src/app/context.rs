use crate::ports::{ScaffoldFilesystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ScaffoldFilesystem, T: TemplateStore> {
    filesystem: F,
    templates: T,
}

impl<F: ScaffoldFilesystem, T: TemplateStore> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(filesystem: F, templates: T) -> Self {
        Self { filesystem, templates }
    }

    /// Get a reference to the filesystem rooted at the invocation directory.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
