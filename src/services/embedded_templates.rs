//! Embedded scaffold content and template rendering.

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::Environment;

use crate::domain::{AppError, Language, ModuleSpec, module_paths};
use crate::ports::{ScaffoldFile, ScaffoldPlan, TemplateStore};

use super::narrative_method;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const TEMPLATE_SUFFIX: &str = ".j2";

/// A file embedded in the scaffold bundle.
#[derive(Debug, Clone, Copy)]
struct EmbeddedFile {
    /// Path relative to the scaffold root.
    path: &'static str,
    /// File content as UTF-8 text.
    content: &'static str,
}

/// Template store backed by assets embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn scaffold_plan(&self, spec: &ModuleSpec) -> Result<ScaffoldPlan, AppError> {
        let env = template_environment()?;
        let ctx = render_context(spec);

        let mut dirs = module_paths::base_dirs();
        let mut files = Vec::new();

        // Fixed boilerplate under base/
        let base = SCAFFOLD_DIR
            .get_dir("base")
            .ok_or_else(|| AppError::Template("Missing scaffold base directory".to_string()))?;
        let mut sources = Vec::new();
        collect_files(base, &mut sources);
        for source in sources {
            let relative = source.path.strip_prefix("base/").ok_or_else(|| {
                AppError::Template(format!("Unexpected scaffold path: {}", source.path))
            })?;
            let dest = relative.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(relative).to_string();
            let content = if source.path.ends_with(TEMPLATE_SUFFIX) {
                render_by_name(&env, source.path, &ctx)?
            } else {
                source.content.to_string()
            };
            files.push(ScaffoldFile { executable: dest.ends_with(".sh"), path: dest, content });
        }

        // Module specification file at the module root
        files.push(ScaffoldFile {
            path: format!("{}.spec", spec.name()),
            content: render_by_name(&env, "module.spec.j2", &ctx)?,
            executable: false,
        });

        // Language implementation stub
        files.push(ScaffoldFile {
            path: spec.language().stub_path(spec.name()),
            content: render_by_name(&env, stub_template(spec.language()), &ctx)?,
            executable: false,
        });

        if spec.example() {
            dirs.extend(module_paths::example_dirs());

            files.push(ScaffoldFile {
                path: "scripts/start_server.sh".to_string(),
                content: render_by_name(&env, "example/scripts/start_server.sh.j2", &ctx)?,
                executable: true,
            });
            files.push(ScaffoldFile {
                path: format!(
                    "{}/{}/spec.json",
                    module_paths::METHODS_DIR,
                    module_paths::EXAMPLE_METHOD
                ),
                content: narrative_method::example_spec_json(spec)?,
                executable: false,
            });
            files.push(ScaffoldFile {
                path: format!(
                    "{}/{}/display.yaml",
                    module_paths::METHODS_DIR,
                    module_paths::EXAMPLE_METHOD
                ),
                content: render_by_name(&env, "example/methods/display.yaml.j2", &ctx)?,
                executable: false,
            });
        }

        Ok(ScaffoldPlan { dirs, files })
    }
}

fn stub_template(language: Language) -> &'static str {
    match language {
        Language::Python => "stubs/Impl.py.j2",
        Language::Perl => "stubs/Impl.pm.j2",
        Language::Java => "stubs/Impl.java.j2",
    }
}

fn render_context(spec: &ModuleSpec) -> minijinja::Value {
    minijinja::context! {
        module_name => spec.name().as_str(),
        owner => spec.owner().unwrap_or("anonymous"),
        language => spec.language().name(),
        example => spec.example(),
        example_method => module_paths::EXAMPLE_METHOD,
    }
}

fn template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let mut files = Vec::new();
    collect_files(&SCAFFOLD_DIR, &mut files);
    for file in files {
        if file.path.ends_with(TEMPLATE_SUFFIX) {
            env.add_template(file.path, file.content).map_err(|err| {
                AppError::Template(format!(
                    "Failed to register template '{}': {}",
                    file.path, err
                ))
            })?;
        }
    }

    Ok(env)
}

fn render_by_name(
    env: &Environment<'_>,
    name: &str,
    ctx: &minijinja::Value,
) -> Result<String, AppError> {
    let template = env
        .get_template(name)
        .map_err(|err| AppError::Template(format!("Failed to load template '{}': {}", name, err)))?;

    template
        .render(ctx)
        .map_err(|err| AppError::Template(format!("Failed to render template '{}': {}", name, err)))
}

fn collect_files(dir: &Dir<'static>, out: &mut Vec<EmbeddedFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let (Some(path), Some(content)) = (file.path().to_str(), file.contents_utf8()) {
                    out.push(EmbeddedFile { path, content });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, out),
        }
    }
}
