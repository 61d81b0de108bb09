mod embedded_templates;
mod module_filesystem;
pub mod narrative_method;

pub use embedded_templates::EmbeddedTemplateStore;
pub use module_filesystem::FilesystemModuleStore;
