//! NanoMind Core - errors, lifecycle events, and the capability markers
//! a layer declaration is checked against

pub mod capability;
pub mod error;
pub mod event;
pub mod handler;
pub mod types;

pub use capability::{Capability, Component, InputStack, NaniteTemplate, OutputStack, TypeRef};
pub use error::{Error, Result};
pub use event::{LayerEvent, EVENTS};
pub use handler::Handler;
pub use types::{EmptyInputStack, EmptyOutputStack, Template};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
