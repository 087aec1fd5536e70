//! Capability registries mapping handler names to handler objects.
//!
//! Tools, prompts, and resources occupy separate namespaces, each backed by
//! its own [`Registry`]. Registries are explicit objects owned by the server
//! state rather than module-level mutable globals: registration happens once
//! at process start, lookups happen at request time, and nothing is removed
//! or mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::capability::{PromptHandler, ResourceHandler, ToolHandler};
use crate::{AppError, Result};

/// A single-namespace mapping from capability name to handler.
///
/// Names must be unique; insertion order carries no semantics.
pub struct Registry<H: ?Sized> {
    namespace: &'static str,
    entries: HashMap<String, Arc<H>>,
}

impl<H: ?Sized> Registry<H> {
    /// Create an empty registry labelled with its namespace for error text.
    #[must_use]
    pub fn new(namespace: &'static str) -> Self {
        Self {
            namespace,
            entries: HashMap::new(),
        }
    }

    /// Register a handler under `name`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateName` if `name` is already registered in
    /// this namespace.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<H>) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(AppError::DuplicateName(format!(
                "{} '{name}' is already registered",
                self.namespace
            )));
        }
        self.entries.insert(name, handler);
        Ok(())
    }

    /// Look up the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no handler with that name exists.
    pub fn lookup(&self, name: &str) -> Result<Arc<H>> {
        self.entries.get(name).map(Arc::clone).ok_or_else(|| {
            AppError::NotFound(format!("no {} named '{name}'", self.namespace))
        })
    }

    /// Iterate over all registered handlers.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<H>> {
        self.entries.values()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three capability namespaces owned by a server instance.
pub struct HandlerRegistries {
    /// Callable tools.
    pub tools: Registry<dyn ToolHandler>,
    /// Prompt templates.
    pub prompts: Registry<dyn PromptHandler>,
    /// Readable resources, keyed by URI.
    pub resources: Registry<dyn ResourceHandler>,
}

impl Default for HandlerRegistries {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerRegistries {
    /// Create three empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Registry::new("tool"),
            prompts: Registry::new("prompt"),
            resources: Registry::new("resource"),
        }
    }

    /// Register a tool under its own reported name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateName` on a name collision.
    pub fn register_tool(&mut self, handler: Arc<dyn ToolHandler>) -> Result<()> {
        self.tools.register(handler.name().to_owned(), handler)
    }

    /// Register a prompt under its own reported name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateName` on a name collision.
    pub fn register_prompt(&mut self, handler: Arc<dyn PromptHandler>) -> Result<()> {
        self.prompts.register(handler.name().to_owned(), handler)
    }

    /// Register a resource under its URI.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateName` on a URI collision.
    pub fn register_resource(&mut self, handler: Arc<dyn ResourceHandler>) -> Result<()> {
        self.resources.register(handler.uri().to_owned(), handler)
    }
}
