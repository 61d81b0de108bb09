use std::fmt;
use std::ops::Deref;

use super::AppError;

/// A validated module name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and create a new module name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidModuleName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ModuleName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name == "." || name == ".." {
        return false;
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_alphanumeric_name() {
        assert!(ModuleName::new("ContigCounter").is_ok());
    }

    #[test]
    fn valid_name_with_underscores() {
        assert!(ModuleName::new("a_simple_module_for_unit_testing").is_ok());
    }

    #[test]
    fn valid_name_with_dashes() {
        assert!(ModuleName::new("my-module-1").is_ok());
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(ModuleName::new(""), Err(AppError::InvalidModuleName(_))));
    }

    #[test]
    fn slash_in_name_is_invalid() {
        assert!(ModuleName::new("invalid/name").is_err());
    }

    #[test]
    fn backslash_in_name_is_invalid() {
        assert!(ModuleName::new("invalid\\name").is_err());
    }

    #[test]
    fn dot_dot_is_invalid() {
        assert!(ModuleName::new("..").is_err());
    }

    #[test]
    fn space_in_name_is_invalid() {
        assert!(ModuleName::new("has space").is_err());
    }

    #[test]
    fn display_impl() {
        let name = ModuleName::new("test_module").unwrap();
        assert_eq!(format!("{}", name), "test_module");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn safe_pattern_always_constructs(name in "[A-Za-z0-9_-]{1,64}") {
            prop_assert!(ModuleName::new(&name).is_ok());
        }

        #[test]
        fn separators_never_construct(
            prefix in "[a-z]{0,8}",
            sep in prop::sample::select(vec!['/', '\\', '\0']),
            suffix in "[a-z]{0,8}",
        ) {
            let name = format!("{}{}{}", prefix, sep, suffix);
            prop_assert!(ModuleName::new(&name).is_err());
        }
    }
}
