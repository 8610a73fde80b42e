//! Layer declaration
//!
//! A [`Layer`] describes a named processing layer: how many nanites it may
//! run and from which template, where it reads from, where it writes to,
//! and which handlers hang off each lifecycle event. Every setter checks its
//! input before touching any field, so a rejected call leaves the
//! declaration exactly as it was.

use crate::selector::{EventSelector, Handlers};
use nanomind_core::{Capability, Component, Error, Handler, LayerEvent, Result, TypeRef};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_CAPACITY: usize = 4;
pub const DEFAULT_KEEP_ALIVE: bool = false;

/// Nanite settings for [`Layer::nanites`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NaniteSettings {
    /// Upper bound on concurrently running nanites.
    pub capacity: usize,
    /// Keep nanites alive between work items instead of recreating them.
    pub keep_alive: bool,
    /// Type every nanite is instantiated from.
    pub template: TypeRef,
}

impl NaniteSettings {
    pub fn new(template: TypeRef) -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            keep_alive: DEFAULT_KEEP_ALIVE,
            template,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }
}

#[derive(Debug)]
pub struct Layer {
    name: String,
    capacity: Option<usize>,
    keep_alive: Option<bool>,
    nanite_template: Option<TypeRef>,
    output_stack: Option<Arc<dyn Component>>,
    input_stack: Option<Arc<dyn Component>>,
    event_handlers: Option<BTreeMap<LayerEvent, Vec<Handler>>>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: None,
            keep_alive: None,
            nanite_template: None,
            output_stack: None,
            input_stack: None,
            event_handlers: None,
        }
    }

    /// Set nanite capacity, keep-alive and template.
    pub fn nanites(&mut self, settings: NaniteSettings) -> Result<()> {
        if !settings.template.conforms_to(Capability::NaniteTemplate) {
            warn!(layer = %self.name, template = %settings.template, "rejected nanite template");
            return Err(Error::dsl(format!(
                "'{}' isn't a nanite template",
                settings.template
            )));
        }

        debug!(
            layer = %self.name,
            capacity = settings.capacity,
            keep_alive = settings.keep_alive,
            template = %settings.template,
            "nanites declared"
        );
        self.capacity = Some(settings.capacity);
        self.keep_alive = Some(settings.keep_alive);
        self.nanite_template = Some(settings.template);
        Ok(())
    }

    /// Set the output stack.
    pub fn output(&mut self, to: Arc<dyn Component>) -> Result<()> {
        if to.as_output_stack().is_none() {
            warn!(layer = %self.name, component = ?to, "rejected output stack");
            return Err(Error::dsl(format!("Can't set output stack to '{:?}'", to)));
        }

        debug!(layer = %self.name, stack = ?to, "output declared");
        self.output_stack = Some(to);
        Ok(())
    }

    /// Set the input stack.
    pub fn input(&mut self, from: Arc<dyn Component>) -> Result<()> {
        if from.as_input_stack().is_none() {
            warn!(layer = %self.name, component = ?from, "rejected input stack");
            return Err(Error::dsl(format!("Can't set input stack to '{:?}'", from)));
        }

        debug!(layer = %self.name, stack = ?from, "input declared");
        self.input_stack = Some(from);
        Ok(())
    }

    /// Register handler(s) against event(s).
    ///
    /// Each named event gets the full handler list, replacing whatever was
    /// registered for it before. All names are checked before anything is
    /// stored.
    pub fn register(
        &mut self,
        handler: impl Into<Handlers>,
        to: impl Into<EventSelector>,
    ) -> Result<()> {
        let selector = to.into();
        let events = match selector.resolve() {
            Ok(events) => events,
            Err(e) => {
                warn!(layer = %self.name, error = %e, "rejected event registration");
                return Err(e);
            }
        };
        let handlers = handler.into().into_vec();

        let registry = self.event_handlers.get_or_insert_with(BTreeMap::new);
        for event in events {
            debug!(layer = %self.name, %event, handlers = handlers.len(), "handlers registered");
            registry.insert(event, handlers.clone());
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn keep_alive(&self) -> Option<bool> {
        self.keep_alive
    }

    pub fn nanite_template(&self) -> Option<&TypeRef> {
        self.nanite_template.as_ref()
    }

    pub fn output_stack(&self) -> Option<&Arc<dyn Component>> {
        self.output_stack.as_ref()
    }

    pub fn input_stack(&self) -> Option<&Arc<dyn Component>> {
        self.input_stack.as_ref()
    }

    pub fn event_handlers(&self) -> Option<&BTreeMap<LayerEvent, Vec<Handler>>> {
        self.event_handlers.as_ref()
    }

    pub fn handlers(&self, event: LayerEvent) -> Option<&[Handler]> {
        self.event_handlers
            .as_ref()
            .and_then(|handlers| handlers.get(&event))
            .map(Vec::as_slice)
    }

    /// Whether a nanite template has been declared.
    ///
    /// Nothing else requires one; a runtime would need to.
    pub fn is_complete(&self) -> bool {
        self.nanite_template.is_some()
    }

    pub fn summary(&self) -> LayerSummary {
        LayerSummary {
            name: self.name.clone(),
            capacity: self.capacity,
            keep_alive: self.keep_alive,
            nanite_template: self.nanite_template.as_ref().map(|t| t.name().to_string()),
            output_stack: self.output_stack.as_ref().map(|s| format!("{:?}", s)),
            input_stack: self.input_stack.as_ref().map(|s| format!("{:?}", s)),
            handlers: self
                .event_handlers
                .iter()
                .flatten()
                .map(|(event, handlers)| (*event, handlers.len()))
                .collect(),
            complete: self.is_complete(),
        }
    }
}

/// Printable snapshot of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanite_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_stack: Option<String>,
    /// Handler count per registered event.
    pub handlers: BTreeMap<LayerEvent, usize>,
    pub complete: bool,
}

impl std::fmt::Display for LayerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        match (&self.nanite_template, self.capacity, self.keep_alive) {
            (Some(template), Some(capacity), Some(keep_alive)) => write!(
                f,
                " nanites={}x{}{}",
                capacity,
                template,
                if keep_alive { " (keep-alive)" } else { "" }
            )?,
            _ => write!(f, " nanites=<unset>")?,
        }
        if let Some(output) = &self.output_stack {
            write!(f, " output={}", output)?;
        }
        if let Some(input) = &self.input_stack {
            write!(f, " input={}", input)?;
        }
        for (event, count) in &self.handlers {
            write!(f, " {}={}", event, count)?;
        }
        Ok(())
    }
}
