use astra::Response;
use maud::{html, DOCTYPE};

use crate::errors::ServerError;
use crate::responses::html_with_status;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    tracing::warn!("request failed: {err}");

    match err {
        ServerError::NotFound => render_error(404, "Pagina non trovata"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::InternalError => render_error(500, "Errore interno"),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="it" {
            head {
                meta charset="utf-8";
                title { "Errore " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Errore " (status) }
                p { (message) }
                p { a href="/" { "← Torna alla home" } }
            }
        }
    };

    html_with_status(status, page)
}
