pub mod assets;
pub mod embedded_template_store;
pub mod filesystem;
pub mod template;
