//! Pure builders for the relative path sets a scaffolded module contains.
//!
//! Every function constructs its list on demand from the request parameters;
//! there is no shared fixture state.

use super::{Language, ModuleName};

/// Name of the example method bundled in example mode.
pub const EXAMPLE_METHOD: &str = "count_contigs_in_set";

/// Directory where narrative method bundles live inside a module.
pub const METHODS_DIR: &str = "ui/narrative/methods";

/// Fixed directories every module contains.
pub fn base_dirs() -> Vec<String> {
    ["docs", "scripts", "test", "ui", "lib", "data", "ui/narrative", METHODS_DIR, "ui/widgets"]
        .iter()
        .map(|dir| dir.to_string())
        .collect()
}

/// Fixed files every module contains, parameterized by module name.
pub fn base_files(name: &ModuleName) -> Vec<String> {
    let mut files: Vec<String> = [
        "lib/README.md",
        "docs/README.md",
        "test/README.md",
        "data/README.md",
        "scripts/entrypoint.sh",
        "LICENSE",
        "README.md",
        ".travis.yml",
        "Dockerfile",
        "Makefile",
    ]
    .iter()
    .map(|file| file.to_string())
    .collect();

    files.push(format!("{}.spec", name));
    files
}

fn example_method_dir() -> String {
    format!("{}/{}", METHODS_DIR, EXAMPLE_METHOD)
}

/// Directories created only in example mode.
pub fn example_dirs() -> Vec<String> {
    vec![example_method_dir(), format!("{}/img", example_method_dir())]
}

/// Files created only in example mode.
pub fn example_files() -> Vec<String> {
    vec![
        format!("{}/spec.json", example_method_dir()),
        format!("{}/display.yaml", example_method_dir()),
        "scripts/start_server.sh".to_string(),
    ]
}

/// The complete relative path set for a module: directories and files.
pub fn expected_paths(name: &ModuleName, language: Language, example: bool) -> Vec<String> {
    let mut paths = base_dirs();
    paths.extend(base_files(name));
    paths.push(language.stub_path(name));
    if example {
        paths.extend(example_dirs());
        paths.extend(example_files());
    }
    paths
}
