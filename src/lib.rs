//! kbmod: scaffold and validate standardized service module layouts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::{
    AppContext,
    commands::{init as init_command, verify as verify_command},
};
use services::{EmbeddedTemplateStore, FilesystemModuleStore};

pub use app::commands::verify::verify_paths;
pub use domain::{AppError, Language, ModuleName, ModuleSpec, module_paths};

/// Initialize a new module directory under the current directory.
///
/// `language` is resolved with `Language::from_name_or_default`: unrecognized
/// names fall back to Python.
pub fn init(
    name: &str,
    owner: Option<&str>,
    language: Option<&str>,
    example: bool,
) -> Result<(), AppError> {
    let language = language.map(Language::from_name_or_default).unwrap_or_default();
    let spec = ModuleSpec::new(name, owner, language, example)?;

    let store = FilesystemModuleStore::current()?;
    let templates = EmbeddedTemplateStore::new();
    let ctx = AppContext::new(store, templates);

    init_command::execute(&ctx, &spec)?;
    println!("✅ Initialized module {} ({})", spec.name(), spec.language());
    Ok(())
}

/// Verify that an existing module directory contains the expected layout.
///
/// Returns `Ok(true)` when every expected path exists; the first missing path
/// is reported to stderr.
pub fn verify(name: &str, language: Option<&str>, example: bool) -> Result<bool, AppError> {
    let language = language.map(Language::from_name_or_default).unwrap_or_default();
    let name = ModuleName::new(name)?;

    let store = FilesystemModuleStore::current()?;
    let templates = EmbeddedTemplateStore::new();
    let ctx = AppContext::new(store, templates);

    let complete = verify_command::execute(&ctx, &name, language, example)?;
    if complete {
        println!("✅ Module {} layout is complete", name);
    }
    Ok(complete)
}
