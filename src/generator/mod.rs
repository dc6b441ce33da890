//! Document generator for TDL definition snippets
//!
//! This module takes a [`GenerationRequest`] and produces the definition text:
//! a header line, an optional `Use :` inheritance line, and the caller's
//! attribute lines under a fixed indent.

pub mod config;
mod emit;
pub mod request;

pub use config::GeneratorConfig;
pub use emit::{generate, generate_with_config};
pub use request::{GenerationRequest, ObjectKind};
