// src/tests/router_tests/api_tests.rs

use serde_json::Value;

use crate::router::handle;
use crate::tests::utils::{app_with, body_string, get, test_app};

fn get_json(uri: &str) -> Value {
    let app = test_app();
    let mut resp = handle(get(uri), &app).unwrap();
    assert_eq!(resp.status(), 200);
    serde_json::from_str(&body_string(&mut resp)).unwrap()
}

fn names(json: &Value) -> Vec<String> {
    json["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["display_name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn unfiltered_listing_returns_all_cards() {
    let json = get_json("/api/listings");
    assert_eq!(json["shown"], 4);
    assert_eq!(json["total"], 4);
    assert_eq!(json["range"], Value::Null);
    assert_eq!(json["sort"], "featured");
}

#[test]
fn range_listing_matches_scenario() {
    let json = get_json("/api/listings?range=5-6");
    assert_eq!(names(&json), ["Villa Ulivi"]);
    assert_eq!(json["range"]["min"], 5);
    assert_eq!(json["range"]["max"], 6);
    assert_eq!(json["cards"][0]["index"], 1);
    assert!(json["summary"].as_str().unwrap().contains("1 su 4"));
}

#[test]
fn sorted_and_searched_listing() {
    let json = get_json("/api/listings?sort=guests-asc&q=+I+");
    // "i" appears in every card's text; unset capacity goes last.
    assert_eq!(
        names(&json),
        ["Casa Vela", "Villa Ulivi", "Corte Scogli", "Trullo"]
    );
    assert_eq!(json["search"], "i");
}

#[test]
fn empty_catalog_returns_empty_payload() {
    let app = app_with("");
    let mut resp = handle(get("/api/listings?range=1-4"), &app).unwrap();
    let json: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();

    assert_eq!(json["total"], 0);
    assert_eq!(json["cards"].as_array().unwrap().len(), 0);
    assert_eq!(json["range"]["min"], 1);
}
