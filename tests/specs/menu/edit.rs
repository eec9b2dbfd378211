//! Edit specs
//!
//! Every edit prints the recorded change, persists the menu, and queues the
//! change for the next save.

use crate::prelude::*;

#[test]
fn move_reorders_and_persists_across_runs() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["move", "0", "3"])
        .passes()
        .stdout_eq("reorder 1: 0 -> 3\n");

    assert_eq!(
        listed_titles(&temp),
        vec!["About", "Services", "Contact", "Home"]
    );
}

#[test]
fn hide_and_show_toggle_visibility() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["hide", "2"])
        .passes()
        .stdout_eq("visibility 2: true -> false\n");
    assert_eq!(temp.cache()["items"][1]["visible"], false);

    temp.navctl()
        .args(&["show", "2"])
        .passes()
        .stdout_eq("visibility 2: false -> true\n");
    assert_eq!(temp.cache()["items"][1]["visible"], true);
}

#[test]
fn rename_changes_title() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["rename", "3", "Work"])
        .passes()
        .stdout_eq("title 3: \"Services\" -> \"Work\"\n");

    assert_eq!(
        listed_titles(&temp),
        vec!["Home", "About", "Work", "Contact"]
    );
}

#[test]
fn unknown_item_fails_without_changes() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["rename", "99", "X"])
        .fails()
        .stderr_has("unknown item: 99");

    assert!(!temp.path().join(".navedit").exists());
    temp.navctl()
        .args(&["changes"])
        .passes()
        .stdout_eq("No pending changes\n");
}

#[test]
fn out_of_range_move_fails() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["move", "1", "4"])
        .fails()
        .stderr_has("index 4 out of range for 4 items");

    assert_eq!(
        listed_titles(&temp),
        vec!["Home", "About", "Services", "Contact"]
    );
}

#[test]
fn changes_lists_edits_in_order() {
    let temp = Project::empty();
    temp.navctl().args(&["hide", "4"]).passes();
    temp.navctl().args(&["move", "3", "0"]).passes();

    temp.navctl()
        .args(&["changes"])
        .passes()
        .stdout_eq("visibility 4: true -> false\nreorder 4: 3 -> 0\n");
}

#[test]
fn changes_json_uses_wire_format() {
    let temp = Project::empty();
    temp.navctl().args(&["rename", "1", "Start"]).passes();

    let changes = temp.navctl().args(&["changes", "--json"]).passes().stdout_json();

    let change = &changes[0];
    assert_eq!(change["type"], "title");
    assert_eq!(change["itemId"], "1");
    assert_eq!(change["details"]["from"], "Home");
    assert_eq!(change["details"]["to"], "Start");
    assert!(change["timestamp"].is_string());
}

#[test]
fn pending_changes_survive_in_cache() {
    let temp = Project::empty();
    temp.navctl().args(&["hide", "3"]).passes();

    let cache = temp.cache();

    assert_eq!(cache["changes"].as_array().unwrap().len(), 1);
    assert_eq!(cache["changes"][0]["type"], "visibility");
}
