//! Quick-wrap button tests
//!
//! Tests for the quick-wrap store end to end:
//! - Serialized blob round trip through the preference file
//! - Most-recently-used reordering
//! - Driving the wrap command from a stored button

mod common;

use common::editor_with_selection;
use realign::{commands, Preferences, QuickWrapStore, WrapOptions};

#[test]
fn test_store_round_trips_through_preference_file() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");

    let mut store = QuickWrapStore::new();
    store.save("Bold", "<b>", "</b>", false);
    store.save("Quote", "\"", "\"", false);

    let mut prefs = Preferences::default();
    prefs.save_quick_wrap_buttons(store.serialized());
    prefs.save_to(&path).unwrap();

    let loaded = QuickWrapStore::from_serialized(Preferences::load_from(&path).quick_wrap_buttons());
    assert_eq!(loaded.buttons(), store.buttons());
    assert_eq!(loaded.labels(), vec!["Bold", "Quote"]);
}

#[test]
fn test_resaving_label_replaces_config_in_place() {
    let mut store = QuickWrapStore::new();
    store.save("A", "(", ")", false);
    store.save("B", "[", "]", false);
    store.save("A", "{", "}", false);

    // A's old entry is gone; the new one is appended after B
    assert_eq!(store.labels(), vec!["B", "A"]);
    assert_eq!(store.get("A").unwrap().prefix, "{");
}

#[test]
fn test_using_a_button_moves_it_to_front() {
    let mut store = QuickWrapStore::new();
    store.save("A", "(", ")", false);
    store.save("B", "[", "]", false);
    store.save("C", "{", "}", false);

    store.promote_to_front("B");

    assert_eq!(store.labels(), vec!["B", "A", "C"]);
}

#[test]
fn test_stored_button_drives_wrap_command() {
    let mut store = QuickWrapStore::new();
    store.save("Emphasis", "<em>", "</em>", false);

    let button = store.get("Emphasis").unwrap();
    let mut state = editor_with_selection("important\n", 0, 9);
    commands::wrap(&mut state, &WrapOptions::new(&button.prefix, &button.postfix));

    assert_eq!(state.content(), "<em>important</em>\n");
}

#[test]
fn test_blob_survives_remove_and_resave() {
    let mut store = QuickWrapStore::new();
    store.save("A", "(", ")", false);
    store.save("B", "[", "]", false);
    store.remove("A");
    store.save("A", "(", ")", false);

    assert_eq!(store.labels(), vec!["B", "A"]);
    assert_eq!(store.len(), 2);
}
