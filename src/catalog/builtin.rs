//! Built-in catalog entries
//!
//! Bodies are static example documents; they are handed out verbatim and must
//! stay byte-stable, whitespace included.

use super::registry::CatalogEntry;

const CUSTOM_REPORT: &str = r#"[Report: My Custom Report]
    Use : DSP Report
    Form : My Custom Form

[Form: My Custom Form]
    Use : DSP Form
    Parts : My Custom Part

[Part: My Custom Part]
    Line : My Title Line

[Line: My Title Line]
    Use : Title Line
    Set : 1 : "My Custom Report""#;

const CUSTOM_MENU: &str = r#"[Menu: Gateway of Tally]
    Add : Item : "My Custom Menu" : Call : My Custom Report

[Report: My Custom Report]
    Use : DSP Report
    Form : My Form"#;

const CUSTOM_FIELD: &str = r#"[Field: My Custom Field]
    Use : Name Field
    Storage : My Custom Field

[#Object: Voucher]
    My Custom Field : String : 100"#;

const CUSTOM_BUTTON: &str = r#"[Button: My Button]
    Key : F12 : My Button
    Action : Display : My Custom Report

[Report: My Custom Report]
    Use : DSP Report
    Form : My Form"#;

const FIELD_VALIDATION: &str = r#"[Field: Amount Field]
    Use : Amount Field
    Validate : ##Amount > 0
    Error : "Amount must be greater than zero""#;

const COLLECTION_OBJECT: &str = r#"[Collection: My Collection]
    Type : Ledger
    Filter : MyFilter

[System: Formula]
    MyFilter : $Name = "Cash""#;

/// Name, description, body of every built-in entry, in authored order
const BUILTIN: [(&str, &str, &str); 6] = [
    ("Custom Report", "Create a basic custom report", CUSTOM_REPORT),
    ("Custom Menu", "Add a custom menu item", CUSTOM_MENU),
    ("Custom Field", "Add a custom field to a voucher", CUSTOM_FIELD),
    ("Custom Button", "Add a custom button", CUSTOM_BUTTON),
    ("Field Validation", "Add validation to a field", FIELD_VALIDATION),
    ("Collection Object", "Create a custom collection", COLLECTION_OBJECT),
];

/// Construct the built-in entries in authored order
pub(super) fn entries() -> Vec<CatalogEntry> {
    BUILTIN
        .iter()
        .map(|(name, description, body)| CatalogEntry {
            name: (*name).to_string(),
            description: (*description).to_string(),
            body: (*body).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_count_and_order() {
        let entries = entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].name, "Custom Report");
        assert_eq!(entries[5].name, "Collection Object");
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let entries = entries();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_bodies_use_four_space_indent() {
        for entry in entries() {
            for line in entry.body.lines() {
                if !line.is_empty() && !line.starts_with('[') {
                    assert!(line.starts_with("    "), "unindented line: {:?}", line);
                }
            }
        }
    }
}
