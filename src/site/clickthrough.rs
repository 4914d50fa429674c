// src/site/clickthrough.rs
//! Whole-card navigation to the details page.

/// Elements whose clicks belong to themselves, not to the card.
const INTERACTIVE_TAGS: [&str; 6] = ["a", "button", "input", "textarea", "select", "label"];

/// Navigation requested by a card interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigate(pub String);

/// Click handler for a card. `ancestry` lists the tag names from the clicked
/// element up to (not including) the card itself.
pub fn on_card_click<'a>(
    details_link: Option<&str>,
    ancestry: impl IntoIterator<Item = &'a str>,
) -> Option<Navigate> {
    let href = details_link?;
    let hits_control = ancestry
        .into_iter()
        .any(|tag| INTERACTIVE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)));

    (!hits_control).then(|| Navigate(href.to_string()))
}

/// Keyboard handler: Enter and Space follow the card link.
pub fn on_card_key(details_link: Option<&str>, key: &str) -> Option<Navigate> {
    let href = details_link?;
    matches!(key, "Enter" | " ").then(|| Navigate(href.to_string()))
}

/// Attributes that make a linked card keyboard reachable.
pub fn card_link_attributes(details_link: Option<&str>) -> Option<(&'static str, &'static str)> {
    details_link.map(|_| ("link", "0"))
}
