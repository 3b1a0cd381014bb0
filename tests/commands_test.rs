//! Command handlers run against an in-memory store with prompts skipped

use prefs_cli::commands::{
    add_command, clear_command, edit_command, get_command, remove_command, set_command,
};
use prefs_cli::prefs::{MemoryMedium, PreferenceStore, PreferenceView, ValueType};

fn store() -> PreferenceStore<MemoryMedium> {
    PreferenceStore::new(MemoryMedium::new())
}

#[test]
fn test_set_then_get() {
    let mut store = store();
    set_command(&mut store, "volume", "0.8", ValueType::Float).unwrap();

    assert_eq!(store.get_float("volume", 0.0).unwrap(), 0.8);
    get_command(&store, "volume", None).unwrap();
    get_command(&store, "volume", Some(ValueType::Float)).unwrap();
    assert!(get_command(&store, "volume", Some(ValueType::Int)).is_err());
    assert!(get_command(&store, "missing", None).is_err());
}

#[test]
fn test_set_rejects_unparsable_number() {
    let mut store = store();
    let result = set_command(&mut store, "level", "three", ValueType::Int);

    assert!(result.is_err());
    assert!(store.all_keys().is_empty());
    assert!(!store.has_key("level"));
}

#[test]
fn test_add_refuses_duplicates() {
    let mut store = store();
    add_command(&mut store, "name", Some("abc".to_string()), ValueType::Text).unwrap();

    let result = add_command(&mut store, "name", Some("xyz".to_string()), ValueType::Text);
    assert!(result.is_err());
    assert_eq!(store.get_text("name", "").unwrap(), "abc");
}

#[test]
fn test_add_rejects_empty_key() {
    let mut store = store();
    assert!(add_command(&mut store, "", Some("1".to_string()), ValueType::Int).is_err());
    assert!(store.all_keys().is_empty());
}

#[test]
fn test_edit_keeps_type_unless_given() {
    let mut store = store();
    set_command(&mut store, "level", "1", ValueType::Int).unwrap();

    edit_command(&mut store, "level", "2", None, true).unwrap();
    assert_eq!(store.get_int("level", 0).unwrap(), 2);

    edit_command(&mut store, "level", "2.5", Some(ValueType::Float), true).unwrap();
    assert_eq!(store.get_float("level", 0.0).unwrap(), 2.5);

    // Stored as float now, so "abc" does not parse
    assert!(edit_command(&mut store, "level", "abc", None, true).is_err());
    assert_eq!(store.get_float("level", 0.0).unwrap(), 2.5);
}

#[test]
fn test_edit_unknown_key_fails() {
    let mut store = store();
    assert!(edit_command(&mut store, "missing", "1", None, true).is_err());
    assert!(!store.has_key("missing"));
}

#[test]
fn test_edit_refreshes_attached_view() {
    let mut store = store();
    set_command(&mut store, "name", "old", ValueType::Text).unwrap();
    let mut view = PreferenceView::attach(&mut store);

    edit_command(&mut store, "name", "new", None, true).unwrap();
    assert!(view.sync(&store));
    assert_eq!(view.find("name").map(|row| row.value.as_str()), Some("new"));
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = store();
    set_command(&mut store, "name", "abc", ValueType::Text).unwrap();

    remove_command(&mut store, "name", true).unwrap();
    remove_command(&mut store, "name", true).unwrap();
    assert!(store.all_keys().is_empty());
    assert_eq!(store.get_text("name", "").unwrap(), "");
}

#[test]
fn test_clear() {
    let mut store = store();
    set_command(&mut store, "a", "1", ValueType::Int).unwrap();
    set_command(&mut store, "b", "x", ValueType::Text).unwrap();

    clear_command(&mut store, true).unwrap();
    assert!(store.all_keys().is_empty());
    assert_eq!(store.get_int("a", 0).unwrap(), 0);
}
