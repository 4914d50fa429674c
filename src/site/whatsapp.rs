// src/site/whatsapp.rs
use url::Url;

use crate::listings::card::safe_text;
use crate::listings::ListingCard;

const WA_BASE: &str = "https://wa.me/";

pub const DEFAULT_MESSAGE: &str =
    "Ciao! Vorrei ricevere disponibilità per una casa/villa a Gallipoli.";

/// Builds pre-filled chat links for one configured recipient.
#[derive(Debug, Clone)]
pub struct WhatsAppLinks {
    number: String,
}

impl WhatsAppLinks {
    /// `number` is in international format without `+` or spaces (e.g. "39333…").
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// `https://wa.me/{number}?text={message}` with the message percent-encoded.
    pub fn link(&self, message: &str) -> String {
        match Url::parse(WA_BASE).and_then(|base| base.join(&self.number)) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("text", message);
                url.into()
            }
            // Only reachable with a number that is not a valid path segment.
            Err(e) => {
                tracing::warn!("⚠️ could not build WhatsApp link for {}: {e}", self.number);
                WA_BASE.to_string()
            }
        }
    }

    pub fn default_link(&self) -> String {
        self.link(DEFAULT_MESSAGE)
    }

    /// Link for the "Chiedi su WhatsApp" button of a card.
    pub fn card_link(&self, card: &ListingCard) -> String {
        self.link(&card_message(
            &card.display_name,
            &card.zone,
            &card.guests_label,
        ))
    }
}

/// Message lines for a card; empty zone / guests lines are left out.
pub fn card_message(house: &str, zone: &str, guests: &str) -> String {
    let house = safe_text(Some(house));
    let zone = safe_text(Some(zone));
    let guests = safe_text(Some(guests));

    join_lines([
        format!("Ciao! Vorrei disponibilità per {house}."),
        prefixed("Zona: ", &zone),
        prefixed("Ospiti: ", &guests),
        "Grazie!".to_string(),
    ])
}

pub(crate) fn prefixed(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

pub(crate) fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
