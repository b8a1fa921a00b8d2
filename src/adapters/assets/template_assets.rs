use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateKind};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Embedded template text by asset name.
pub fn template_content(name: &str) -> Option<&'static str> {
    TEMPLATE_DIR.get_file(name).and_then(|file| file.contents_utf8())
}

/// Embedded template text for a template kind.
pub fn template_for(kind: TemplateKind) -> Result<&'static str, AppError> {
    template_content(kind.asset_name())
        .ok_or_else(|| AppError::TemplateNotFound(kind.asset_name().to_string()))
}
