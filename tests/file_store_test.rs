//! Preference store persistence against the TOML file medium

use prefs_cli::prefs::{FileMedium, KEY_INDEX_KEY, PrefValue, PreferenceMedium, PreferenceStore, ValueType};
use std::fs;
use tempfile::TempDir;

fn open(path: &std::path::Path) -> PreferenceStore<FileMedium> {
    PreferenceStore::new(FileMedium::open(path).unwrap())
}

#[test]
fn test_key_index_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.toml");

    let mut store = open(&path);
    store.set("volume", 0.8).unwrap();
    store.set_text("name", "abc").unwrap();
    store.set_int("level", 12).unwrap();
    store.save().unwrap();
    let expected = store.all_keys().clone();
    drop(store);

    let store = open(&path);
    assert_eq!(store.all_keys(), &expected);
    assert_eq!(store.get_float("volume", 0.0).unwrap(), 0.8);
    assert_eq!(store.get_text("name", "").unwrap(), "abc");
    assert_eq!(store.get_int("level", 0).unwrap(), 12);
}

#[test]
fn test_new_keys_are_flushed_without_explicit_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.toml");

    let mut store = open(&path);
    store.set_int("level", 1).unwrap();
    drop(store);

    let store = open(&path);
    assert!(store.all_keys().contains("level"));
    assert_eq!(store.get_int("level", 0).unwrap(), 1);
}

#[test]
fn test_remove_and_clear_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.toml");

    let mut store = open(&path);
    store.set_text("name", "abc").unwrap();
    store.set_int("level", 3).unwrap();
    store.remove("name").unwrap();
    drop(store);

    let mut store = open(&path);
    assert_eq!(store.get_text("name", "").unwrap(), "");
    assert!(!store.all_keys().contains("name"));
    assert!(store.all_keys().contains("level"));

    store.clear_all().unwrap();
    drop(store);

    let store = open(&path);
    assert!(store.all_keys().is_empty());
    assert_eq!(store.get_int("level", -1).unwrap(), -1);
}

#[test]
fn test_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.toml");

    let mut store = open(&path);
    store.set_int("level", 3).unwrap();
    drop(store);

    let content = fs::read_to_string(&path).unwrap();
    let doc: toml::Table = toml::from_str(&content).unwrap();
    let entries = doc["entries"].as_table().unwrap();

    let level = entries["level"].as_table().unwrap();
    assert_eq!(level["type"].as_str(), Some("int"));
    assert_eq!(level["value"].as_integer(), Some(3));

    let index = entries[KEY_INDEX_KEY].as_table().unwrap();
    assert_eq!(index["type"].as_str(), Some("text"));
    assert_eq!(index["value"].as_str(), Some(r#"{"keys":["level"]}"#));
}

#[test]
fn test_externally_written_keys_are_not_indexed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.toml");

    let mut medium = FileMedium::open(&path).unwrap();
    medium.set("written_elsewhere", PrefValue::Int(9));
    medium.flush().unwrap();

    let store = open(&path);
    assert!(store.has_key("written_elsewhere"));
    assert!(!store.all_keys().contains("written_elsewhere"));
    assert_eq!(store.type_of("written_elsewhere"), Some(ValueType::Int));
}
