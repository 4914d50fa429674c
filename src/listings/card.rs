// src/listings/card.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::listings::CatalogError;

/// Digits followed by "ospiti" in the rendered card text, e.g. "👥 6 ospiti".
static GUESTS_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*ospiti\b").expect("guest pattern is a valid regex")
});

pub const CARD_SELECTOR: &str = ".property-card";

/// One rental property as read from the host document.
///
/// Identity is the card's position in the collection; there is no separate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    pub guest_capacity: Option<u32>,
    /// `data-guests` as written ("10 posti"), quoted in the WhatsApp message.
    pub guests_label: String,
    pub zone: String,
    pub display_name: String,
    pub searchable_text: String,
    pub details_link: Option<String>,
}

impl ListingCard {
    /// Reads a card from its `.property-card` element. Never fails: anything missing
    /// or malformed degrades to unset / empty.
    pub fn from_element(el: ElementRef<'_>) -> Self {
        let searchable_text = safe_text(Some(el.text().collect::<String>().as_str()));
        let guests_label = safe_text(el.value().attr("data-guests"));
        let explicit = parse_leading_int(&guests_label);
        let guest_capacity = explicit.or_else(|| guests_from_text(&searchable_text));

        if explicit.is_none() {
            tracing::debug!(
                name = el.value().attr("data-name").unwrap_or_default(),
                recovered = ?guest_capacity,
                "card has no usable data-guests attribute"
            );
        }

        Self {
            guest_capacity,
            guests_label,
            zone: safe_text(el.value().attr("data-zone")),
            display_name: safe_text(el.value().attr("data-name")),
            searchable_text,
            details_link: details_link(el),
        }
    }

    /// Text the search term is matched against, already lower-cased.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name, self.zone, self.searchable_text
        )
        .to_lowercase()
    }
}

/// Trim, and turn absent values into an empty string.
pub fn safe_text(s: Option<&str>) -> String {
    s.unwrap_or_default().trim().to_string()
}

/// Leading decimal digits of the trimmed input, after an optional `+`
/// ("6 persone" -> 6, "+5" -> 5). Runs too long for `u32` saturate. Negative or
/// digit-less input yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(raw.len());

    let digits = &raw[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

pub fn guests_from_text(text: &str) -> Option<u32> {
    GUESTS_IN_TEXT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn details_link(el: ElementRef<'_>) -> Option<String> {
    if let Some(href) = el.value().attr("data-href").map(str::trim) {
        if !href.is_empty() {
            return Some(href.to_string());
        }
    }

    for css in ["a.link[href]", "a[href]"] {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        let href = el
            .select(&selector)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty() && !href.starts_with('#'));

        if let Some(href) = href {
            return Some(href.to_string());
        }
    }

    None
}

/// Reads every listing card of a host document, in document order.
pub fn extract_cards(html: &str) -> Result<Vec<ListingCard>, CatalogError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(CARD_SELECTOR).map_err(|e| CatalogError::Selector(e.to_string()))?;

    Ok(document
        .select(&selector)
        .map(ListingCard::from_element)
        .collect())
}
