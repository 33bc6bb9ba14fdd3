//! Integration tests for the shopping list.
//!
//! Every test works on a fresh document in a temporary data directory.

use std::fs;

use tempfile::TempDir;
use trnt_core::{ErrorCategory, ShoppingList, ShoppingListError};

fn fresh_list() -> (ShoppingList, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let list = ShoppingList::in_dir(temp_dir.path());
    (list, temp_dir)
}

#[test]
fn test_ids_start_at_zero_and_follow_max_plus_one() {
    let (list, _temp) = fresh_list();

    assert_eq!(list.add("A", "magnet:?a").unwrap(), 0);
    assert_eq!(list.add("B", "magnet:?b").unwrap(), 1);
    assert_eq!(list.add("C", "magnet:?c").unwrap(), 2);

    // Removing a middle id leaves a gap that is not reused.
    list.remove(1).unwrap();
    assert_eq!(list.add("D", "magnet:?d").unwrap(), 3);

    // Removing the max id lets the next add take it again.
    list.remove(3).unwrap();
    assert_eq!(list.add("E", "magnet:?e").unwrap(), 3);

    let ids: Vec<u64> = list.list().unwrap().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![0, 2, 3]);
}

#[test]
fn test_add_to_existing_document_uses_numeric_max() {
    let (list, _temp) = fresh_list();
    fs::write(
        list.path(),
        r#"{"0": {"name": "A", "magnet": "magnet:?a", "added": 1}}"#,
    )
    .unwrap();

    assert_eq!(list.add("B", "magnet:?b").unwrap(), 1);
    assert_eq!(
        list.list().unwrap(),
        vec![(0, "A".to_string()), (1, "B".to_string())]
    );
}

#[test]
fn test_list_is_sorted_by_id() {
    let (list, _temp) = fresh_list();
    fs::write(
        list.path(),
        r#"{
            "10": {"name": "ten", "magnet": "magnet:?10", "added": 1},
            "9": {"name": "nine", "magnet": "magnet:?9", "added": 1},
            "2": {"name": "two", "magnet": "magnet:?2", "added": 1}
        }"#,
    )
    .unwrap();

    let names: Vec<String> = list.list().unwrap().into_iter().map(|(_, n)| n).collect();
    assert_eq!(names, vec!["two", "nine", "ten"]);
    assert_eq!(list.add("eleven", "magnet:?11").unwrap(), 11);
}

#[test]
fn test_get_returns_stored_entry() {
    let (list, _temp) = fresh_list();
    let id = list.add("Show.S01", "magnet:?xt=urn:btih:abc").unwrap();

    let entry = list.get(id).unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.name, "Show.S01");
    assert_eq!(entry.magnet_link, "magnet:?xt=urn:btih:abc");
}

#[test]
fn test_remove_twice_reports_not_found() {
    let (list, _temp) = fresh_list();
    let id = list.add("A", "magnet:?a").unwrap();

    let removed = list.remove(id).unwrap();
    assert_eq!(removed.name, "A");

    let err = list.remove(id).unwrap_err();
    assert!(matches!(err, ShoppingListError::NotFound(0)), "got: {err:?}");
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.category().is_recoverable());
}

#[test]
fn test_remove_missing_id_leaves_document_untouched() {
    let (list, _temp) = fresh_list();
    list.add("A", "magnet:?a").unwrap();
    let before = fs::read_to_string(list.path()).unwrap();

    assert!(list.remove(42).unwrap_err().is_not_found());
    assert_eq!(fs::read_to_string(list.path()).unwrap(), before);
}

#[test]
fn test_clear_then_list_is_empty_and_ids_restart() {
    let (list, _temp) = fresh_list();
    list.add("A", "magnet:?a").unwrap();
    list.add("B", "magnet:?b").unwrap();

    assert_eq!(list.clear().unwrap(), 2);
    assert!(list.list().unwrap().is_empty());
    assert_eq!(list.add("C", "magnet:?c").unwrap(), 0);
}

#[test]
fn test_clear_on_missing_document_creates_empty_one() {
    let (list, _temp) = fresh_list();
    assert_eq!(list.clear().unwrap(), 0);
    assert!(list.path().exists());
    assert!(list.list().unwrap().is_empty());
}

#[test]
fn test_document_survives_new_handle() {
    let (list, temp) = fresh_list();
    list.add("Show.S01", "magnet:?xt=1").unwrap();
    list.add("Show.S02", "magnet:?xt=2").unwrap();

    let reopened = ShoppingList::in_dir(temp.path());
    let entries = reopened.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "Show.S02");
    assert_eq!(entries[1].magnet_link, "magnet:?xt=2");
}
