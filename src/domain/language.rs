use std::fmt;

use super::ModuleName;

/// Implementation languages supported by the module scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Python service implementation (the default).
    #[default]
    Python,
    /// Perl service implementation.
    Perl,
    /// Java service implementation.
    Java,
}

impl Language {
    /// All supported languages in order.
    pub const ALL: [Language; 3] = [Language::Python, Language::Perl, Language::Java];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Perl => "perl",
            Language::Java => "java",
        }
    }

    /// Parse a language from its canonical name.
    pub fn from_name(name: &str) -> Option<Language> {
        match name.to_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "perl" | "pl" => Some(Language::Perl),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Parse a language name, falling back to the default for unrecognized values.
    pub fn from_name_or_default(name: &str) -> Language {
        Language::from_name(name).unwrap_or_default()
    }

    /// Relative path of this language's implementation stub for a module.
    pub fn stub_path(&self, module: &ModuleName) -> String {
        match self {
            Language::Python => format!("lib/biokbase/{}/Impl.py", module),
            Language::Perl => format!("lib/Bio/KBase/{}/Impl.pm", module),
            Language::Java => format!("lib/src/us/kbase/{m}/{m}_impl.java", m = module),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
