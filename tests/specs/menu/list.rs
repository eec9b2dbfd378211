//! Listing specs

use crate::prelude::*;

#[test]
fn fresh_project_lists_default_menu() {
    let temp = Project::empty();

    assert_eq!(
        listed_titles(&temp),
        vec!["Home", "About", "Services", "Contact"]
    );
}

#[test]
fn text_listing_has_header_and_rows_in_order() {
    let temp = Project::empty();

    let run = temp.navctl().args(&["list"]).passes();
    let stdout = run.stdout();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("ORDER"));
    assert!(lines[1].starts_with("0 ") && lines[1].contains("Home") && lines[1].ends_with("/"));
    assert!(lines[4].starts_with("3 ") && lines[4].contains("Contact") && lines[4].ends_with("/contact"));
}

#[test]
fn json_listing_carries_every_field() {
    let temp = Project::empty();

    let items = temp.navctl().args(&["list", "--json"]).passes().stdout_json();

    assert_eq!(
        items[1],
        serde_json::json!({
            "id": "2",
            "title": "About",
            "url": "/about",
            "visible": true,
            "order": 1
        })
    );
}

#[test]
fn listing_does_not_write_cache() {
    let temp = Project::empty();

    temp.navctl().args(&["list"]).passes();

    assert!(!temp.path().join(".navedit").exists());
}

#[test]
fn corrupt_cache_falls_back_to_defaults() {
    let temp = Project::empty();
    temp.file(".navedit/navigation-state.json", "not json");

    assert_eq!(
        listed_titles(&temp),
        vec!["Home", "About", "Services", "Contact"]
    );
}

#[test]
fn hand_edited_orders_are_normalized() {
    let temp = Project::empty();
    temp.file(
        ".navedit/navigation-state.json",
        r#"{"items": [
            {"id": "a", "title": "Blog", "url": "/blog", "visible": true, "order": 10},
            {"id": "b", "title": "Shop", "url": "/shop", "visible": false, "order": 3}
        ]}"#,
    );

    let items = temp.navctl().args(&["list", "--json"]).passes().stdout_json();

    assert_eq!(items[0]["title"], "Shop");
    assert_eq!(items[0]["order"], 0);
    assert_eq!(items[1]["title"], "Blog");
    assert_eq!(items[1]["order"], 1);
}

#[test]
fn visible_listing_matches_public_menu() {
    let temp = Project::empty();
    temp.navctl().args(&["hide", "2"]).passes();

    let items = temp
        .navctl()
        .args(&["list", "--visible", "--json"])
        .passes()
        .stdout_json();
    let titles: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["Home", "Services", "Contact"]);
    assert_eq!(items[1]["order"], 2);
}
