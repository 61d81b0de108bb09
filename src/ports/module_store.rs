use std::path::{Path, PathBuf};

use crate::domain::{AppError, ModuleName};

use super::ScaffoldPlan;

/// Filesystem seam for module creation and inspection.
pub trait ModuleStore {
    /// Root directory under which module trees are created.
    fn root(&self) -> &Path;

    /// Absolute path of the module directory for a name.
    fn module_path(&self, name: &ModuleName) -> PathBuf;

    /// Whether anything already exists at the module path.
    fn exists(&self, name: &ModuleName) -> bool;

    /// Create the module tree described by the plan.
    ///
    /// Directories first, then files; parent directories of file paths are
    /// created as needed.
    fn create_structure(&self, name: &ModuleName, plan: &ScaffoldPlan) -> Result<(), AppError>;
}
