use crate::ports::{ModuleStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<M: ModuleStore, T: TemplateStore> {
    store: M,
    templates: T,
}

impl<M: ModuleStore, T: TemplateStore> AppContext<M, T> {
    /// Create a new application context.
    pub fn new(store: M, templates: T) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the module store.
    pub fn store(&self) -> &M {
        &self.store
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
