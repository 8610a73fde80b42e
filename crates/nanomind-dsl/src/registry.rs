//! Name registry for manifest-driven declarations
//!
//! Manifests refer to templates, stacks and handlers by name. The registry
//! maps those names to the values a [`Layer`](crate::Layer) is checked
//! against. Lookups that miss are reported as DSL errors.

use nanomind_core::{
    Component, EmptyInputStack, EmptyOutputStack, Error, Handler, Result, Template, TypeRef,
};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Registry {
    templates: HashMap<String, TypeRef>,
    components: HashMap<String, Arc<dyn Component>>,
    handlers: HashMap<String, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock entries:
    /// `base` template, `null-out` / `null-in` stacks and a `noop` handler.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_template("base", TypeRef::template::<Template>());
        registry.register_component("null-out", Arc::new(EmptyOutputStack));
        registry.register_component("null-in", Arc::new(EmptyInputStack));
        registry.register_handler("noop", Handler::new(|| {}));
        registry
    }

    /// Register a template. Replaces any existing template with the same name.
    pub fn register_template(&mut self, name: impl Into<String>, template: TypeRef) {
        self.templates.insert(name.into(), template);
    }

    /// Register a component. Replaces any existing component with the same name.
    pub fn register_component(&mut self, name: impl Into<String>, component: Arc<dyn Component>) {
        self.components.insert(name.into(), component);
    }

    /// Register a handler. Replaces any existing handler with the same name.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: Handler) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn template(&self, name: &str) -> Result<TypeRef> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| Error::dsl(format!("'{}' isn't a nanite template", name)))
    }

    pub fn component(&self, name: &str) -> Result<Arc<dyn Component>> {
        self.components
            .get(name)
            .cloned()
            .ok_or_else(|| Error::dsl(format!("Unknown component '{}'", name)))
    }

    pub fn handler(&self, name: &str) -> Result<Handler> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::dsl(format!("Unknown handler '{}'", name)))
    }

    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn handler_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
