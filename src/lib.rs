//! NanoMind - declarative agent layers
//!
//! The binary validates layer manifests; the logic lives here so it can be
//! tested without spawning a process.

pub mod check;
