//! Document emission
//!
//! Generation is deterministic and side-effect-free: equal requests with an
//! equal configuration produce byte-identical documents. Validation happens
//! before any text is built, so a failed call never produces partial output.

use crate::error::GenerateError;

use super::config::GeneratorConfig;
use super::request::GenerationRequest;

/// Generate a document with the default configuration
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use tdl_forge::{generate, GenerationRequest, ObjectKind};
///
/// let request = GenerationRequest::new(ObjectKind::Report, "My Report")
///     .with_use_clause("DSP Report")
///     .with_attributes("Form : F1\n\nTitle : T1");
///
/// let document = generate(&request).unwrap();
/// assert_eq!(
///     document,
///     "[Report: My Report]\n    Use : DSP Report\n    Form : F1\n    Title : T1\n"
/// );
/// ```
pub fn generate(request: &GenerationRequest) -> Result<String, GenerateError> {
    generate_with_config(request, &GeneratorConfig::default())
}

/// Generate a document with a custom configuration
pub fn generate_with_config(
    request: &GenerationRequest,
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    if request.name.trim().is_empty() {
        return Err(GenerateError::MissingName);
    }

    let indent = config.indent();
    let mut document = String::new();

    // Header line. Kind and name go in verbatim; the name is only validated,
    // never trimmed.
    document.push_str(&format!("[{}: {}]\n", request.kind, request.name));

    if let Some(clause) = request.use_clause.as_deref() {
        if !clause.is_empty() {
            document.push_str(&format!("{}Use : {}\n", indent, clause));
        }
    }

    if let Some(attributes) = request.attributes.as_deref() {
        for line in attributes.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            document.push_str(&format!("{}{}\n", indent, line));
        }
    }

    Ok(document)
}
