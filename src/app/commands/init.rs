use crate::app::AppContext;
use crate::domain::{AppError, ModuleSpec};
use crate::ports::{ModuleStore, TemplateStore};

/// Execute the init command.
///
/// Fails with `ModuleExists` before any filesystem write when the target
/// directory is already present; the full scaffold plan is rendered before
/// the first write, so rendering failures also leave the disk untouched.
pub fn execute<M, T>(ctx: &AppContext<M, T>, spec: &ModuleSpec) -> Result<(), AppError>
where
    M: ModuleStore,
    T: TemplateStore,
{
    if ctx.store().exists(spec.name()) {
        return Err(AppError::ModuleExists(spec.name().to_string()));
    }

    let plan = ctx.templates().scaffold_plan(spec)?;
    ctx.store().create_structure(spec.name(), &plan)?;

    Ok(())
}
