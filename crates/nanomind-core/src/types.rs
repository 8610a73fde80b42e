//! Empty marker types
//!
//! No runtime exists yet, so these carry no behavior. They are the stock
//! values a declaration can point at.

use crate::capability::NaniteTemplate;

/// The base nanite template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Template;

impl NaniteTemplate for Template {}

/// An output stack that accepts nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyOutputStack;

crate::component!(EmptyOutputStack: OutputStack);

/// An input stack that yields nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyInputStack;

crate::component!(EmptyInputStack: InputStack);
