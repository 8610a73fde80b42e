//! NanoMind DSL - layer declarations
//!
//! Build a [`Layer`] by hand, or describe one in a TOML [`Manifest`] and
//! resolve it against a [`Registry`].

pub mod layer;
pub mod manifest;
pub mod registry;
pub mod selector;

pub use layer::{Layer, LayerSummary, NaniteSettings, DEFAULT_CAPACITY, DEFAULT_KEEP_ALIVE};
pub use manifest::{HandlerNames, Manifest, NanitesSection, RegisterEntry, StackSection};
pub use registry::Registry;
pub use selector::{EventSelector, Handlers};
