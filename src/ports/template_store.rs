use crate::domain::{AppError, ModuleSpec};

/// A rendered file in a scaffold plan.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Path relative to the module root.
    pub path: String,
    /// Rendered file content.
    pub content: String,
    /// Whether the file carries the executable bit.
    pub executable: bool,
}

/// The full set of directories and files to create for one module.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldPlan {
    pub dirs: Vec<String>,
    pub files: Vec<ScaffoldFile>,
}

/// Source of rendered scaffold content.
pub trait TemplateStore {
    /// Render the complete scaffold plan for a module request.
    fn scaffold_plan(&self, spec: &ModuleSpec) -> Result<ScaffoldPlan, AppError>;
}
