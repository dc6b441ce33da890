//! TDL Forge - A form-to-text authoring tool for Tally TDL snippets
//!
//! This library provides a template catalog and a document generator for short
//! TDL (Tally Definition Language) definition snippets. TDL is treated as an
//! opaque text format: nothing is parsed or validated beyond the presence of an
//! object name.
//!
//! # Example
//!
//! ```rust
//! use tdl_forge::{generate, GenerationRequest, ObjectKind};
//!
//! let request = GenerationRequest::new(ObjectKind::Report, "My Report")
//!     .with_use_clause("DSP Report");
//!
//! let document = generate(&request).unwrap();
//! assert!(document.starts_with("[Report: My Report]\n"));
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod generator;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use error::GenerateError;
pub use export::ExportError;
pub use generator::{generate, generate_with_config, GenerationRequest, GeneratorConfig, ObjectKind};
