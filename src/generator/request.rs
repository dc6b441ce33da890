//! Request types collected from the caller
//!
//! A [`GenerationRequest`] is the structured record a UI or CLI builds from its
//! current form state and passes by value into the generator. It owns its data,
//! so the generator stays testable independent of any surrounding surface.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The kind of TDL definition being authored
///
/// The known labels match the object-kind selector of the authoring surface.
/// Any other label is carried verbatim in [`ObjectKind::Custom`]; kinds are
/// never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Report,
    Form,
    Part,
    Line,
    Field,
    Collection,
    Menu,
    Button,
    Function,
    Object,
    /// Any other kind label, emitted as-is
    Custom(String),
}

impl ObjectKind {
    /// The known kind labels, in selector order
    pub const LABELS: [&'static str; 10] = [
        "Report",
        "Form",
        "Part",
        "Line",
        "Field",
        "Collection",
        "Menu",
        "Button",
        "Function",
        "Object",
    ];

    /// The label emitted into the document header
    pub fn label(&self) -> &str {
        match self {
            ObjectKind::Report => "Report",
            ObjectKind::Form => "Form",
            ObjectKind::Part => "Part",
            ObjectKind::Line => "Line",
            ObjectKind::Field => "Field",
            ObjectKind::Collection => "Collection",
            ObjectKind::Menu => "Menu",
            ObjectKind::Button => "Button",
            ObjectKind::Function => "Function",
            ObjectKind::Object => "Object",
            ObjectKind::Custom(label) => label,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for ObjectKind {
    fn from(label: &str) -> Self {
        match label {
            "Report" => ObjectKind::Report,
            "Form" => ObjectKind::Form,
            "Part" => ObjectKind::Part,
            "Line" => ObjectKind::Line,
            "Field" => ObjectKind::Field,
            "Collection" => ObjectKind::Collection,
            "Menu" => ObjectKind::Menu,
            "Button" => ObjectKind::Button,
            "Function" => ObjectKind::Function,
            "Object" => ObjectKind::Object,
            other => ObjectKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for ObjectKind {
    fn from(label: String) -> Self {
        ObjectKind::from(label.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(ObjectKind::from(label))
    }
}

/// A single generation request
///
/// Built fresh per call; not persisted. Equal requests always generate
/// byte-identical documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Kind of the definition (header line)
    pub kind: ObjectKind,
    /// Name of the definition (header line, required)
    pub name: String,
    /// Optional inheritance clause, emitted as a `Use :` line
    pub use_clause: Option<String>,
    /// Optional multi-line attribute text, one attribute per line
    pub attributes: Option<String>,
}

impl GenerationRequest {
    /// Create a request with the required kind and name
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            use_clause: None,
            attributes: None,
        }
    }

    /// Set the inheritance clause
    pub fn with_use_clause(mut self, clause: impl Into<String>) -> Self {
        self.use_clause = Some(clause.into());
        self
    }

    /// Set the attribute lines
    pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kind_from_label() {
        assert_eq!(ObjectKind::from("Report"), ObjectKind::Report);
        assert_eq!(ObjectKind::from("Collection"), ObjectKind::Collection);
    }

    #[test]
    fn test_unknown_kind_is_carried_verbatim() {
        let kind = ObjectKind::from("Voucher Type");
        assert_eq!(kind, ObjectKind::Custom("Voucher Type".to_string()));
        assert_eq!(kind.label(), "Voucher Type");
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for label in ObjectKind::LABELS {
            let kind = ObjectKind::from(label);
            assert!(!matches!(kind, ObjectKind::Custom(_)));
            assert_eq!(kind.label(), label);
        }
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new(ObjectKind::Field, "Amount Field")
            .with_use_clause("Name Field")
            .with_attributes("Storage : Amount");

        assert_eq!(request.name, "Amount Field");
        assert_eq!(request.use_clause.as_deref(), Some("Name Field"));
        assert_eq!(request.attributes.as_deref(), Some("Storage : Amount"));
    }
}
