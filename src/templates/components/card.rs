use maud::{html, Markup};

use crate::listings::presenter::Visibility;
use crate::listings::ListingCard;
use crate::site::clickthrough::card_link_attributes;

/// One listing card. `index` is the catalog position, used by the /ask and /go
/// routes.
pub fn property_card(
    index: usize,
    card: &ListingCard,
    visibility: Visibility,
) -> Markup {
    let class = match visibility.classes() {
        "" => "property-card".to_string(),
        extra => format!("property-card {extra}"),
    };
    let link_attrs = card_link_attributes(card.details_link.as_deref());
    let guests = (!card.guests_label.is_empty()).then_some(card.guests_label.as_str());

    html! {
        article
            class=(class)
            data-guests=[guests]
            data-zone=(card.zone)
            data-name=(card.display_name)
            data-href=[card.details_link.as_deref()]
            role=[link_attrs.map(|(role, _)| role)]
            tabindex=[link_attrs.map(|(_, tab)| tab)]
            hidden[!visibility.is_visible()]
        {
            h3 { (card.display_name) }
            p class="property-card__meta" {
                @if !card.zone.is_empty() { span { "📍 " (card.zone) } }
                @if let Some(g) = card.guest_capacity { span { " 👥 " (g) " ospiti" } }
            }
            div class="property-card__actions" {
                a class="btn btn--wa js-wa-card" href={ "/ask?card=" (index) }
                    target="_blank" rel="noopener"
                {
                    "Chiedi su WhatsApp"
                }
                @if card.details_link.is_some() {
                    a class="link" href={ "/go?card=" (index) } { "Vedi dettagli" }
                }
            }
        }
    }
}
