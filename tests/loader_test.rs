//! Tests for the multi-source loader

use std::collections::BTreeMap;
use std::path::PathBuf;

use tempfile::TempDir;

use datapath::util::testing;
use datapath::{resolve, DataLoader, LoadError, StaticReader};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn create_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write source file");
    path
}

fn sources(entries: &[(&str, &PathBuf)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, path)| (name.to_string(), path.to_string_lossy().into_owned()))
        .collect()
}

#[test]
fn given_two_sources_when_loading_then_root_has_one_child_per_logical_name() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let src1 = create_source(&temp, "home.yaml", "title: Welcome\nbody: Hello\n");
    let src2 = create_source(&temp, "about.yaml", "title: About us\n");

    // Act
    let loader = DataLoader::new();
    let root = loader
        .load(&sources(&[("home", &src1), ("about", &src2)]))
        .unwrap();

    // Assert
    assert_eq!(resolve("home.title", &root).unwrap(), "Welcome");
    assert_eq!(resolve("home.body", &root).unwrap(), "Hello");
    assert_eq!(resolve("about.title", &root).unwrap(), "About us");
    // src2 contributes nothing under "home"
    assert!(root.child("home").unwrap().child("body").is_ok());
    assert!(root.child("about").unwrap().child("body").is_err());
}

#[test]
fn given_missing_source_file_when_loading_then_read_error_aborts_load() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let valid = create_source(&temp, "home.yaml", "title: Welcome\n");
    let missing = temp.path().join("nonexistent.yaml");

    // Act
    let loader = DataLoader::new();
    let result = loader.load(&sources(&[("home", &valid), ("about", &missing)]));

    // Assert: no partial root
    assert!(matches!(result, Err(LoadError::Read { name, .. }) if name == "about"));
}

#[test]
fn given_unparseable_source_when_loading_then_deserialize_error_aborts_load() {
    // Arrange
    let reader = StaticReader::new()
        .with_document("src1", "title: Welcome\n")
        .with_document("src2", "title: [unclosed\n");
    let loader = DataLoader::with_reader(reader);
    let entries: BTreeMap<String, String> = [
        ("home".to_string(), "src1".to_string()),
        ("about".to_string(), "src2".to_string()),
    ]
    .into_iter()
    .collect();

    // Act
    let result = loader.load(&entries);

    // Assert
    assert!(matches!(result, Err(LoadError::Deserialize { name, .. }) if name == "about"));
}

#[test]
fn given_malformed_source_when_loading_then_build_error_aborts_load() {
    // Arrange: one valid source, one with a numeric leaf
    let reader = StaticReader::new()
        .with_document("src1", "title: Welcome\n")
        .with_document("src2", "count: 3\n");
    let loader = DataLoader::with_reader(reader);
    let entries: BTreeMap<String, String> = [
        ("home".to_string(), "src1".to_string()),
        ("stats".to_string(), "src2".to_string()),
    ]
    .into_iter()
    .collect();

    // Act
    let result = loader.load(&entries);

    // Assert
    assert!(matches!(result, Err(LoadError::Build { name, .. }) if name == "stats"));
}

#[test]
fn given_loaded_root_when_injecting_title_then_it_resolves() {
    // Arrange
    let reader = StaticReader::new().with_document("src1", "body: Hello\n");
    let loader = DataLoader::with_reader(reader);
    let entries: BTreeMap<String, String> =
        [("home".to_string(), "src1".to_string())].into_iter().collect();
    let mut root = loader.load(&entries).unwrap();

    // Act
    root.set_title("Site").unwrap();

    // Assert
    assert_eq!(resolve("title", &root).unwrap(), "Site");
    assert_eq!(resolve("home.body", &root).unwrap(), "Hello");
}

#[test]
fn given_single_source_when_loading_then_tree_matches_builder_output() {
    // Arrange
    let reader = StaticReader::new().with_document("src1", "title: Welcome\n");
    let loader = DataLoader::with_reader(reader);

    // Act
    let tree = loader.load_source("home", "src1").unwrap();

    // Assert
    assert_eq!(tree.child("title").unwrap().value().unwrap(), "Welcome");
}
