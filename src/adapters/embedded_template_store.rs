use crate::adapters::assets::template_assets::template_for;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::domain::{AppError, TemplateContext, TemplateKind};
use crate::ports::TemplateStore;

/// Template store backed by assets compiled into the binary.
#[derive(Default)]
pub struct EmbeddedTemplateStore {
    renderer: MinijinjaTemplateRenderer,
}

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String, AppError> {
        let template = template_for(kind)?;
        self.renderer.render(template, context, kind.asset_name())
    }
}
