//! Layer lifecycle events
//!
//! The set is closed: handlers can only be registered against these four
//! points in a layer's life.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named point in a layer's lifecycle at which handlers would run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerEvent {
    AfterCreation,
    BeforeNaniteCreation,
    AfterNaniteCreation,
    BeforeDeletion,
}

/// Every lifecycle event, in declaration order.
pub const EVENTS: [LayerEvent; 4] = [
    LayerEvent::AfterCreation,
    LayerEvent::BeforeNaniteCreation,
    LayerEvent::AfterNaniteCreation,
    LayerEvent::BeforeDeletion,
];

impl LayerEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AfterCreation => "after_creation",
            Self::BeforeNaniteCreation => "before_nanite_creation",
            Self::AfterNaniteCreation => "after_nanite_creation",
            Self::BeforeDeletion => "before_deletion",
        }
    }
}

impl fmt::Display for LayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LayerEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EVENTS
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::dsl(format!("Unknown event '{}'", s)))
    }
}
