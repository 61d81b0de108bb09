use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ModuleName};
use crate::ports::{ModuleStore, ScaffoldPlan};

/// Filesystem-based module store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemModuleStore {
    root: PathBuf,
}

impl FilesystemModuleStore {
    /// Create a module store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a module store rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn set_executable(path: &Path) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        Ok(())
    }
}

impl ModuleStore for FilesystemModuleStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn module_path(&self, name: &ModuleName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn exists(&self, name: &ModuleName) -> bool {
        self.module_path(name).exists()
    }

    fn create_structure(&self, name: &ModuleName, plan: &ScaffoldPlan) -> Result<(), AppError> {
        let module_root = self.module_path(name);
        fs::create_dir_all(&module_root)?;

        for dir in &plan.dirs {
            fs::create_dir_all(module_root.join(dir))?;
        }

        for file in &plan.files {
            let path = module_root.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &file.content)?;
            if file.executable {
                Self::set_executable(&path)?;
            }
        }

        Ok(())
    }
}
