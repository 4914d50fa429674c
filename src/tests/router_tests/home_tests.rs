// src/tests/router_tests/home_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, get, test_app};

/// Opening `<article ...>` tags of the listing cards, in page order.
fn article_tags(body: &str) -> Vec<&str> {
    body.split("<article")
        .skip(1)
        .filter_map(|rest| rest.split('>').next())
        .collect()
}

fn is_hidden(tag: &str) -> bool {
    tag.ends_with(" hidden") || tag.contains(" hidden ")
}

#[test]
fn home_lists_every_card_without_filters() {
    let app = test_app();
    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for name in ["Casa Vela", "Villa Ulivi", "Trullo", "Corte Scogli"] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains("Mostrando 4 su 4. Tutte le fasce"));
    // "Mostra tutte" is only offered while a filter is active.
    assert!(body.contains(r#"id="btnShowAll" href="/" hidden"#));
    assert_eq!(article_tags(&body).len(), 4);
    assert!(article_tags(&body).iter().all(|tag| !is_hidden(tag)));
}

#[test]
fn range_query_filters_and_labels_the_summary() {
    let app = test_app();
    let mut resp = handle(get("/?range=5-6"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Mostrando 1 su 4. Fascia: 5–6 posti"), "{body}");
    assert!(body.contains(r#"aria-pressed="true""#));
    // Clicking the active option again links back to the unfiltered page, so no
    // link selects 5-6 a second time.
    assert!(!body.contains("range=5-6"), "{body}");
    assert!(body.contains(r##"href="/?range=7-8#case" data-scroll="smooth""##), "{body}");
    assert!(!body.contains(r#"id="btnShowAll" href="/" hidden"#));
}

#[test]
fn filtered_out_cards_render_hidden() {
    let app = test_app();
    let mut resp = handle(get("/?range=5-6"), &app).unwrap();
    let body = body_string(&mut resp);

    let tags = article_tags(&body);
    assert_eq!(tags.len(), 4);

    let hidden: Vec<_> = tags.iter().filter(|tag| is_hidden(tag)).collect();
    assert_eq!(hidden.len(), 3, "{tags:#?}");
    assert!(hidden.iter().all(|tag| tag.contains("is-hidden is-gone")));

    let shown: Vec<_> = tags.iter().filter(|tag| !is_hidden(tag)).collect();
    assert!(shown[0].contains(r#"data-name="Villa Ulivi""#));
}

#[test]
fn show_all_link_keeps_the_sort() {
    let app = test_app();
    let mut resp = handle(get("/?range=5-6&q=baia&sort=name-asc"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(r#"id="btnShowAll" href="/?sort=name-asc">"#), "{body}");
}

#[test]
fn pending_search_is_applied_before_rendering() {
    let app = test_app();
    let mut resp = handle(get("/?q=VELA"), &app).unwrap();
    let body = body_string(&mut resp);

    let hidden = article_tags(&body).into_iter().filter(|t| is_hidden(t)).count();
    assert_eq!(hidden, 3);
    assert!(body.contains("Mostrando 1 su 4"));
}

#[test]
fn search_query_matches_zone_case_insensitively() {
    let app = test_app();
    let mut resp = handle(get("/?q=gallipoli"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Mostrando 1 su 4"), "{body}");
    assert!(body.contains(r#"Ricerca: &quot;gallipoli&quot;"#), "{body}");
    assert!(body.contains(r#"value="gallipoli""#));
}

#[test]
fn sort_query_reorders_cards() {
    let app = test_app();
    let mut resp = handle(get("/?sort=guests-desc"), &app).unwrap();
    let body = body_string(&mut resp);

    let pos = |name: &str| body.find(name).unwrap_or_else(|| panic!("missing {name}"));
    let corte = pos(r#"data-name="Corte Scogli""#);
    let ulivi = pos(r#"data-name="Villa Ulivi""#);
    let vela = pos(r#"data-name="Casa Vela""#);
    let trullo = pos(r#"data-name="Trullo""#);
    assert!(corte < ulivi && ulivi < vela && vela < trullo);
    assert!(body.contains(r#"value="guests-desc" selected"#));
}

#[test]
fn empty_catalog_still_renders() {
    let app = app_with("<p>nessuna casa</p>");
    let mut resp = handle(get("/"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Nessuna casa disponibile"));
    assert!(!body.contains("resultsMeta"));
    assert!(body.contains("requestForm"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    match handle(get("/admin"), &app) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}
