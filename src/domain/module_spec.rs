use super::{AppError, Language, ModuleName};

/// A request to scaffold a new module.
///
/// Constructed fresh per initialization call; validation happens here, before
/// any filesystem work.
#[derive(Debug, Clone)]
pub struct ModuleSpec {
    name: ModuleName,
    owner: Option<String>,
    language: Language,
    example: bool,
}

impl ModuleSpec {
    /// Validate inputs and build a scaffold request.
    pub fn new(
        name: &str,
        owner: Option<&str>,
        language: Language,
        example: bool,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: ModuleName::new(name)?,
            owner: owner.map(str::to_string),
            language,
            example,
        })
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Owner recorded in generated boilerplate. None means anonymous attribution.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn example(&self) -> bool {
        self.example
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_owner_and_language() {
        let spec = ModuleSpec::new("my_module", Some("kbasedev"), Language::Perl, true).unwrap();
        assert_eq!(spec.name().as_str(), "my_module");
        assert_eq!(spec.owner(), Some("kbasedev"));
        assert_eq!(spec.language(), Language::Perl);
        assert!(spec.example());
    }

    #[test]
    fn rejects_empty_name() {
        let result = ModuleSpec::new("", None, Language::default(), false);
        assert!(matches!(result, Err(AppError::InvalidModuleName(_))));
    }

    #[test]
    fn owner_is_optional() {
        let spec = ModuleSpec::new("my_module", None, Language::default(), false).unwrap();
        assert_eq!(spec.owner(), None);
    }
}
