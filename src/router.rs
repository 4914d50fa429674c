use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::Datelike;
use serde::Serialize;

use crate::app::App;
use crate::errors::ServerError;
use crate::listings::{GuestRange, ListingCard};
use crate::query::ListingQuery;
use crate::responses::{html_response, json_response, see_other, ResultResp};
use crate::site::clickthrough::{on_card_click, on_card_key};
use crate::site::slider::HeroSlider;
use crate::site::RequestForm;
use crate::templates;
use crate::templates::components::hero::HERO_IMAGES;

/// Request bodies larger than this are rejected (the request form is tiny).
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app, query.as_deref()),
        ("GET", "/api/listings") => api_listings(app, query.as_deref()),
        ("GET", "/ask") => {
            let params = parse_query(query.as_deref());
            let card = card_param(app, &params)?;
            see_other(&app.whatsapp.card_link(card))
        }
        ("GET", "/go") => {
            let params = parse_query(query.as_deref());
            let card = card_param(app, &params)?;
            let link = card.details_link.as_deref().ok_or(ServerError::NotFound)?;

            // `key` reports a keyboard activation; without it the card body was clicked.
            let nav = match params.get("key") {
                Some(key) => on_card_key(Some(link), key).ok_or_else(|| {
                    ServerError::BadRequest(format!("key {key:?} does not open a card"))
                })?,
                None => on_card_click(Some(link), std::iter::empty::<&str>())
                    .ok_or(ServerError::NotFound)?,
            };
            see_other(&nav.0)
        }
        ("POST", "/request") => {
            let mut body = Vec::new();
            req.body_mut()
                .reader()
                .take(MAX_FORM_BYTES + 1)
                .read_to_end(&mut body)
                .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
            if body.len() as u64 > MAX_FORM_BYTES {
                return Err(ServerError::BadRequest("form too large".into()));
            }

            let form = RequestForm::from_urlencoded(&body);
            see_other(&app.whatsapp.link(&form.message()))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App, raw_query: Option<&str>) -> ResultResp {
    let now = app.now();
    let query = ListingQuery::parse(raw_query);
    let controller = query.controller(app.catalog.cards(), app.reduced_motion, now);

    let mut slider = HeroSlider::start(HERO_IMAGES.len(), app.reduced_motion, 0);
    if let Some(slider) = slider.as_mut() {
        slider.tick(now);
    }
    let vm = templates::pages::HomeVm {
        controller: controller.as_ref(),
        now,
        slider: slider.as_ref(),
        default_wa_link: app.whatsapp.default_link(),
        year: chrono::Local::now().year(),
    };

    html_response(templates::pages::home_page(&vm))
}

#[derive(Serialize)]
struct CardJson<'a> {
    index: usize,
    #[serde(flatten)]
    card: &'a ListingCard,
    ask_link: String,
}

#[derive(Serialize)]
struct ListingsJson<'a> {
    shown: usize,
    total: usize,
    summary: Option<&'a str>,
    range: Option<GuestRange>,
    search: &'a str,
    sort: &'static str,
    cards: Vec<CardJson<'a>>,
}

fn api_listings(app: &App, raw_query: Option<&str>) -> ResultResp {
    let query = ListingQuery::parse(raw_query);
    let controller = query.controller(app.catalog.cards(), app.reduced_motion, app.now());

    let payload = match &controller {
        Some(c) => ListingsJson {
            shown: c.shown_count(),
            total: c.total(),
            summary: c.summary(),
            range: c.state().active_range,
            search: c.state().search_term(),
            sort: c.sort_mode().as_str(),
            cards: c
                .visible_cards()
                .into_iter()
                .map(|(index, card)| CardJson {
                    index,
                    card,
                    ask_link: app.whatsapp.card_link(card),
                })
                .collect(),
        },
        None => ListingsJson {
            shown: 0,
            total: 0,
            summary: None,
            range: query.range,
            search: &query.search,
            sort: query.sort.as_str(),
            cards: Vec::new(),
        },
    };

    json_response(&payload)
}

fn card_param<'a>(
    app: &'a App,
    params: &HashMap<String, String>,
) -> Result<&'a ListingCard, ServerError> {
    let index: usize = params
        .get("card")
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| ServerError::BadRequest("missing or invalid card".into()))?;

    app.catalog.get(index).ok_or(ServerError::NotFound)
}

fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    raw.map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
