pub mod error;
pub mod language;
pub mod module_name;
pub mod module_paths;
pub mod module_spec;

pub use error::AppError;
pub use language::Language;
pub use module_name::ModuleName;
pub use module_spec::ModuleSpec;
