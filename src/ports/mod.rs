mod module_store;
mod template_store;

pub use module_store::ModuleStore;
pub use template_store::{ScaffoldFile, ScaffoldPlan, TemplateStore};
