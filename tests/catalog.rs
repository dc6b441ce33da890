//! Integration tests for the template catalog

use pretty_assertions::assert_eq;

use tdl_forge::{generate, Catalog, CatalogError, GenerationRequest, ObjectKind};

#[test]
fn test_builtin_entries_in_authored_order() {
    let catalog = Catalog::builtin();
    let names: Vec<_> = catalog.names().collect();
    assert_eq!(
        names,
        vec![
            "Custom Report",
            "Custom Menu",
            "Custom Field",
            "Custom Button",
            "Field Validation",
            "Collection Object",
        ]
    );
}

#[test]
fn test_builtin_catalog_is_never_empty() {
    assert!(!Catalog::builtin().is_empty());
}

#[test]
fn test_custom_report_body_is_exact() {
    let catalog = Catalog::builtin();
    let entry = catalog.find("Custom Report").expect("Should exist");
    insta::assert_snapshot!(entry.body, @r#"
    [Report: My Custom Report]
        Use : DSP Report
        Form : My Custom Form

    [Form: My Custom Form]
        Use : DSP Form
        Parts : My Custom Part

    [Part: My Custom Part]
        Line : My Title Line

    [Line: My Title Line]
        Use : Title Line
        Set : 1 : "My Custom Report"
    "#);
}

#[test]
fn test_field_validation_body_is_exact() {
    let catalog = Catalog::builtin();
    let entry = catalog.find("Field Validation").expect("Should exist");
    assert_eq!(
        entry.body,
        "[Field: Amount Field]\n    Use : Amount Field\n    Validate : ##Amount > 0\n    Error : \"Amount must be greater than zero\""
    );
}

#[test]
fn test_entry_body_unchanged_by_generator_calls() {
    let catalog = Catalog::builtin();
    let before = catalog.get(2).expect("Should exist").body.clone();

    let request = GenerationRequest::new(ObjectKind::Field, "My Custom Field")
        .with_attributes("Storage : My Custom Field");
    generate(&request).expect("Should generate");

    let after = &catalog.get(2).expect("Should exist").body;
    assert_eq!(&before, after);
    assert_eq!(after, &Catalog::builtin().get(2).unwrap().body);
}

#[test]
fn test_lookup_by_index_and_name_agree() {
    let catalog = Catalog::builtin();
    for (index, entry) in catalog.entries().iter().enumerate() {
        assert_eq!(catalog.get(index), Some(entry));
        assert_eq!(catalog.find(&entry.name), Some(entry));
    }
    assert!(catalog.get(catalog.len()).is_none());
}

#[test]
fn test_user_catalog_extends_builtins() {
    let mut catalog = Catalog::builtin();
    catalog
        .extend_from_toml(
            r#"
[[templates]]
name = "Ledger Filter"
description = "Filter ledgers by name"
body = "[Collection: Filtered]\n    Type : Ledger"
"#,
        )
        .expect("Should extend");

    assert_eq!(catalog.len(), 7);
    assert_eq!(
        catalog.find("Ledger Filter").map(|e| e.body.as_str()),
        Some("[Collection: Filtered]\n    Type : Ledger")
    );
}

#[test]
fn test_duplicate_of_builtin_is_rejected() {
    let mut catalog = Catalog::builtin();
    let result = catalog.extend_from_toml(
        r#"
[[templates]]
name = "Custom Menu"
body = "[Menu: Shadowed]"
"#,
    );
    assert!(matches!(result, Err(CatalogError::Duplicate { .. })));
    // The catalog still serves the original entry
    assert!(catalog
        .find("Custom Menu")
        .expect("Should exist")
        .body
        .starts_with("[Menu: Gateway of Tally]"));
}
