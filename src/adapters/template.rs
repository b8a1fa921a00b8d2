use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{AppError, TemplateContext};

/// Template renderer using Minijinja.
///
/// Only `{{ slot }}` substitution is allowed; block and comment tags are rejected.
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(AppError::TemplateSyntaxNotAllowed {
                template: template_name.to_string(),
                token: token.to_string(),
            });
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, context).map_err(|err| template_render_error(template_name, err))
    }
}

impl Default for MinijinjaTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
