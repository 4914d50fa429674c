// src/tests/router_tests/redirect_tests.rs

use http::Method;

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, location, request, test_app, TEST_NUMBER};

#[test]
fn request_form_redirects_to_whatsapp() {
    let app = test_app();
    let req = request(
        Method::POST,
        "/request",
        "checkin=2026-07-01&checkout=2026-07-08&guests=6&budget=&notes=",
    );

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 303);

    let to = location(&resp);
    assert!(
        to.starts_with(&format!("https://wa.me/{TEST_NUMBER}?text=")),
        "{to}"
    );
    assert!(to.contains("Arrivo%3A+2026-07-01"), "{to}");
    assert!(to.contains("Ospiti%3A+6"), "{to}");
    assert!(!to.contains("Budget"), "{to}");
}

#[test]
fn oversized_form_is_rejected() {
    let app = test_app();
    let notes = "x".repeat(20 * 1024);
    let req = request(Method::POST, "/request", &format!("notes={notes}"));

    match handle(req, &app) {
        Err(ServerError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn ask_builds_card_message() {
    let app = test_app();
    let resp = handle(get("/ask?card=1"), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let to = location(&resp);
    assert!(to.contains("Villa+Ulivi"), "{to}");
    assert!(to.contains("Zona%3A+Baia+Verde"), "{to}");
}

#[test]
fn go_follows_details_link() {
    let app = test_app();
    let resp = handle(get("/go?card=3"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "case/corte-scogli.html");
}

#[test]
fn go_opens_card_from_keyboard() {
    let app = test_app();
    let resp = handle(get("/go?card=0&key=Enter"), &app).unwrap();
    assert_eq!(location(&resp), "case/casa-vela.html");

    let resp = handle(get("/go?card=0&key=+"), &app).unwrap();
    assert_eq!(resp.status(), 303);

    assert!(matches!(
        handle(get("/go?card=0&key=Tab"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn go_without_details_link_is_not_found() {
    let app = test_app();
    assert!(matches!(
        handle(get("/go?card=2"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn card_param_is_validated() {
    let app = test_app();
    assert!(matches!(
        handle(get("/ask"), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/ask?card=abc"), &app),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/ask?card=42"), &app),
        Err(ServerError::NotFound)
    ));
}
