use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::GeneratedScript;

fn script() -> GeneratedScript {
    GeneratedScript::new(
        "public void Build()\n{\n}\n\n".to_string(),
        BTreeSet::from(["Cake.Tools".to_string(), "Cake.Core".to_string()]),
        vec![PathBuf::from("tools/Tools.dll")],
    )
}

#[test]
fn empty_script() {
    let empty = GeneratedScript::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.source(), "");
    assert!(empty.namespaces().is_empty());
    assert!(empty.references().is_empty());
    assert_eq!(empty.render_usings(), "");
    assert_eq!(empty.render_references(), "");
}

#[test]
fn reference_only_script_is_not_empty() {
    let script = GeneratedScript::new(
        String::new(),
        BTreeSet::new(),
        vec![PathBuf::from("Tools.dll")],
    );
    assert!(!script.is_empty());
}

#[test]
fn usings_are_sorted() {
    assert_eq!(script().render_usings(), "using Cake.Core;\nusing Cake.Tools;\n");
}

#[test]
fn reference_directives() {
    assert_eq!(script().render_references(), "#r \"tools/Tools.dll\"\n");
}

#[test]
fn into_parts() {
    let (source, namespaces, references) = script().into_parts();
    assert!(source.starts_with("public void Build()"));
    assert_eq!(namespaces.len(), 2);
    assert_eq!(references, [PathBuf::from("tools/Tools.dll")]);
}

#[test]
fn serializes_to_json() {
    let json = serde_json::to_value(script()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "source": "public void Build()\n{\n}\n\n",
            "namespaces": ["Cake.Core", "Cake.Tools"],
            "references": ["tools/Tools.dll"],
        })
    );
}
