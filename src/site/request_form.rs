// src/site/request_form.rs
use crate::site::whatsapp::{join_lines, prefixed};

/// Fields of the "richiedi una proposta" form. Dates stay as typed (yyyy-mm-dd).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub checkin: String,
    pub checkout: String,
    pub guests: String,
    pub budget: String,
    pub notes: String,
}

impl RequestForm {
    /// Reads the url-encoded form body; unknown fields are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "checkin" => &mut form.checkin,
                "checkout" => &mut form.checkout,
                "guests" => &mut form.guests,
                "budget" => &mut form.budget,
                "notes" => &mut form.notes,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        form
    }

    pub fn message(&self) -> String {
        join_lines([
            "Ciao! Vorrei una proposta per Gallipoli / Salento.".to_string(),
            prefixed("- Arrivo: ", self.checkin.trim()),
            prefixed("- Partenza: ", self.checkout.trim()),
            prefixed("- Ospiti: ", self.guests.trim()),
            prefixed("- Budget: ", self.budget.trim()),
            prefixed("- Note: ", self.notes.trim()),
        ])
    }
}
