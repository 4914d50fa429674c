use std::io::Read;

use astra::{Body, Request, Response};
use http::Method;

use crate::app::App;
use crate::config::SiteConfig;
use crate::listings::Catalog;

pub const TEST_NUMBER: &str = "390000000001";

/// Four cards: 2 guests, 6 guests, no capacity, 9 guests.
pub const LISTINGS_HTML: &str = r#"
<div id="cardsGrid">
  <article class="property-card" data-guests="2" data-zone="Alezio" data-name="Casa Vela"
           data-href="case/casa-vela.html"><p>👥 2 ospiti</p></article>
  <article class="property-card" data-guests="6" data-zone="Baia Verde" data-name="Villa Ulivi"
           data-href="case/villa-ulivi.html"><p>👥 6 ospiti</p></article>
  <article class="property-card" data-zone="Rivabella" data-name="Trullo"><p>Su richiesta</p></article>
  <article class="property-card" data-guests="9" data-zone="Gallipoli Centro" data-name="Corte Scogli"
           data-href="case/corte-scogli.html"><p>👥 9 ospiti</p></article>
</div>
"#;

/// App over the four-card catalog, with a fixed WhatsApp number.
pub fn test_app() -> App {
    app_with(LISTINGS_HTML)
}

pub fn app_with(html: &str) -> App {
    let catalog = Catalog::from_html(html).unwrap_or_else(|e| panic!("bad test catalog: {e}"));
    let cfg = SiteConfig {
        whatsapp_number: TEST_NUMBER.to_string(),
        ..SiteConfig::default()
    };
    App::new(catalog, &cfg)
}

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, "")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
