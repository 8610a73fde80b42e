//! Layer manifests: a layer declaration written as TOML
//!
//! ```toml
//! name = "ingest"
//!
//! [nanites]
//! capacity = 8
//! keep_alive = true
//! template = "base"
//!
//! [output]
//! stack = "null-out"
//!
//! [[register]]
//! events = ["after_creation", "before_deletion"]
//! handlers = "noop"
//! ```
//!
//! Parsing only checks shape. Names are resolved against a [`Registry`] and
//! every value goes through the same [`Layer`] checks as a hand-built
//! declaration.

use crate::layer::{Layer, NaniteSettings, DEFAULT_CAPACITY};
use crate::registry::Registry;
use crate::selector::EventSelector;
use nanomind_core::{Handler, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub name: String,
    pub nanites: Option<NanitesSection>,
    pub output: Option<StackSection>,
    pub input: Option<StackSection>,
    #[serde(default)]
    pub register: Vec<RegisterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NanitesSection {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub keep_alive: bool,
    pub template: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackSection {
    pub stack: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterEntry {
    /// Left untyped so the event shape is reported as a DSL error.
    pub events: toml::Value,
    pub handlers: HandlerNames,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HandlerNames {
    One(String),
    Many(Vec<String>),
}

impl HandlerNames {
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl Manifest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded manifest '{}' from {}", manifest.name, path.display());
        Ok(manifest)
    }

    /// Build the declaration: nanites, then output, input, and every
    /// register entry in file order.
    pub fn declare(&self, registry: &Registry) -> Result<Layer> {
        let mut layer = Layer::new(self.name.clone());

        if let Some(nanites) = &self.nanites {
            let template = registry.template(&nanites.template)?;
            layer.nanites(
                NaniteSettings::new(template)
                    .capacity(nanites.capacity)
                    .keep_alive(nanites.keep_alive),
            )?;
        }

        if let Some(output) = &self.output {
            layer.output(registry.component(&output.stack)?)?;
        }

        if let Some(input) = &self.input {
            layer.input(registry.component(&input.stack)?)?;
        }

        for entry in &self.register {
            let events = EventSelector::from_value(&entry.events)?;
            let handlers = entry
                .handlers
                .names()
                .iter()
                .map(|name| registry.handler(name))
                .collect::<Result<Vec<Handler>>>()?;
            layer.register(handlers, events)?;
        }

        Ok(layer)
    }
}
