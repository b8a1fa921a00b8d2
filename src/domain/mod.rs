pub mod error;
pub mod identifier;
pub mod layout;
pub mod template;

pub use error::AppError;
pub use identifier::Identifier;
pub use template::{TemplateContext, TemplateKind};
