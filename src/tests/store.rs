use super::{JsonStore, Store};
use crate::error::Error;
use crate::section::SectionNode;
use std::fs;
use tempfile::TempDir;

fn template() -> SectionNode {
    SectionNode::internal(
        "Техническое задание",
        vec![
            SectionNode::leaf("Общие сведения", ""),
            SectionNode::leaf("Требования к надежности", ""),
        ],
    )
}

#[test]
fn test_template_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("store"));
    store.save_template("default", &template()).unwrap();

    assert!(dir.path().join("store/templates.json").exists());
    assert_eq!(store.load_template("default").unwrap(), template());
}

#[test]
fn test_reads_hand_written_templates_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("templates.json"),
        r#"[{"name": "srs", "structure": {
            "name": "Doc", "children": [{"name": "A", "text": ""}]
        }}]"#,
    )
    .unwrap();
    let store = JsonStore::new(dir.path());
    let loaded = store.load_template("srs").unwrap();
    assert_eq!(loaded.children[0].name, "A");
}

#[test]
fn test_missing_names_are_not_found() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    match store.load_template("absent") {
        Err(Error::NotFound { kind, name }) => {
            assert_eq!(kind, "template");
            assert_eq!(name, "absent");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(matches!(
        store.load_result("absent.docx"),
        Err(Error::NotFound { kind: "result", .. })
    ));
}

#[test]
fn test_save_result_replaces_same_document() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    let first = SectionNode::internal("Doc", vec![SectionNode::leaf("A", "old")]);
    let second = SectionNode::internal("Doc", vec![SectionNode::leaf("A", "new")]);
    let other = SectionNode::internal("Doc", vec![SectionNode::leaf("B", "other")]);

    store.save_result("srs.docx", &first).unwrap();
    store.save_result("other.docx", &other).unwrap();
    store.save_result("srs.docx", &second).unwrap();

    let results = store.results().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document_name, "srs.docx");
    assert_eq!(store.load_result("srs.docx").unwrap(), second);
    assert_eq!(store.load_result("other.docx").unwrap(), other);
}

#[test]
fn test_invalid_template_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    let bad = SectionNode::internal("Doc", vec![]);
    assert!(matches!(
        store.save_template("bad", &bad),
        Err(Error::InvalidTemplate { .. })
    ));
    assert!(store.templates().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.json"), "not json").unwrap();
    let store = JsonStore::new(dir.path());
    assert!(matches!(store.load_result("x"), Err(Error::Json(_))));
}
