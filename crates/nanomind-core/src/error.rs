//! Error types for NanoMind

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A layer declaration was given a value it cannot accept.
    #[error("dsl error: {0}")]
    Dsl(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn dsl(message: impl Into<String>) -> Self {
        Self::Dsl(message.into())
    }

    pub fn is_dsl(&self) -> bool {
        matches!(self, Self::Dsl(_))
    }
}
