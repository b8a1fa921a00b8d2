use crate::domain::{AppError, TemplateContext, TemplateKind};

/// Source of rendered scaffold text.
pub trait TemplateStore {
    /// Render `kind` with the given substitution slots.
    fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String, AppError>;
}
