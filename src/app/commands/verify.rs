use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, Language, ModuleName, module_paths};
use crate::ports::{ModuleStore, TemplateStore};

/// Check each expected path under `root`, reporting the first missing one.
///
/// Returns false on the first miss, true when every path exists.
pub fn verify_paths(root: &Path, expected: &[String]) -> bool {
    for path in expected {
        let full = root.join(path);
        if !full.exists() {
            eprintln!("Unable to find path: {}", full.display());
            return false;
        }
    }
    true
}

/// Execute the verify command against an existing module directory.
pub fn execute<M, T>(
    ctx: &AppContext<M, T>,
    name: &ModuleName,
    language: Language,
    example: bool,
) -> Result<bool, AppError>
where
    M: ModuleStore,
    T: TemplateStore,
{
    let expected = module_paths::expected_paths(name, language, example);
    Ok(verify_paths(&ctx.store().module_path(name), &expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_expectation_is_complete() {
        let dir = TempDir::new().unwrap();
        assert!(verify_paths(dir.path(), &[]));
    }

    #[test]
    fn reports_missing_path() {
        let dir = TempDir::new().unwrap();
        let expected = vec!["docs".to_string()];
        assert!(!verify_paths(dir.path(), &expected));

        fs::create_dir(dir.path().join("docs")).unwrap();
        assert!(verify_paths(dir.path(), &expected));
    }

    #[test]
    fn accepts_files_and_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/README.md"), "docs").unwrap();

        let expected = vec!["docs".to_string(), "docs/README.md".to_string()];
        assert!(verify_paths(dir.path(), &expected));
    }
}
