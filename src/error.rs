//! Error types for document generation

use thiserror::Error;

/// Errors raised by the document generator
///
/// Generation fails atomically: no partial document is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request carried an empty or whitespace-only object name
    #[error("object name is required")]
    MissingName,
}
