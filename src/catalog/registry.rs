//! Catalog storage and TOML loading

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::builtin;

/// Errors that can occur during catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing catalog TOML
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Duplicate entry name
    #[error("duplicate catalog entry: {name}")]
    Duplicate { name: String },
}

/// A named example document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Unique display label
    pub name: String,
    /// One-line description shown next to the name
    pub description: String,
    /// The example document text, handed out verbatim
    pub body: String,
}

/// TOML structure for deserializing user catalog files
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    templates: Vec<TomlEntry>,
}

#[derive(Deserialize)]
struct TomlEntry {
    name: String,
    #[serde(default)]
    description: String,
    body: String,
}

/// An ordered collection of catalog entries
///
/// Enumeration order is authored order; entries are never reordered or
/// mutated once added.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
        }
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_file(path)?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_toml(content)?;
        Ok(catalog)
    }

    /// Append entries from a TOML file, after the existing ones
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let content = std::fs::read_to_string(path)?;
        self.extend_from_toml(&content)
    }

    /// Append entries from a TOML string, after the existing ones
    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        for entry in parsed.templates {
            self.push(CatalogEntry {
                name: entry.name,
                description: entry.description,
                body: entry.body,
            })?;
        }
        Ok(())
    }

    /// Append a single entry, rejecting duplicate names
    pub fn push(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if self.contains(&entry.name) {
            return Err(CatalogError::Duplicate { name: entry.name });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// All entries, in authored order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Get an entry by position
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Find an entry by name (exact match)
    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Check if an entry with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// All entry names, in authored order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
