//! Template catalog of canned example documents
//!
//! The catalog is a fixed, ordered collection of named example documents shown
//! to the user as starting points. Built-in entries are constructed once from
//! static data and never mutated; a catalog can additionally be extended with
//! user entries loaded from a TOML file.
//!
//! # Example
//!
//! ```rust
//! use tdl_forge::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let entry = catalog.find("Custom Report").unwrap();
//! assert!(entry.body.starts_with("[Report: My Custom Report]"));
//! ```

mod builtin;
mod registry;

pub use registry::{Catalog, CatalogEntry, CatalogError};
