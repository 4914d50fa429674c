// src/listings/sort.rs

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::listings::card::ListingCard;
use crate::listings::collation::compare_base;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep the current order.
    #[default]
    Featured,
    GuestsAsc,
    GuestsDesc,
    ZoneAsc,
    NameAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Featured,
        SortMode::GuestsAsc,
        SortMode::GuestsDesc,
        SortMode::ZoneAsc,
        SortMode::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::GuestsAsc => "guests-asc",
            SortMode::GuestsDesc => "guests-desc",
            SortMode::ZoneAsc => "zone-asc",
            SortMode::NameAsc => "name-asc",
        }
    }

    /// Label used in the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Featured => "Consigliate",
            SortMode::GuestsAsc => "Ospiti ↑",
            SortMode::GuestsDesc => "Ospiti ↓",
            SortMode::ZoneAsc => "Zona A–Z",
            SortMode::NameAsc => "Nome A–Z",
        }
    }

    /// Unknown selector values behave like `featured`.
    pub fn from_param(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| format!("unknown sort mode: {s}"))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be ordered as a listing card.
pub trait AsListingCard {
    fn card(&self) -> &ListingCard;
}

impl AsListingCard for ListingCard {
    fn card(&self) -> &ListingCard {
        self
    }
}

/// Catalog index paired with its card, as held by the controller.
impl AsListingCard for (usize, &ListingCard) {
    fn card(&self) -> &ListingCard {
        self.1
    }
}

/// Unset capacity goes last in both directions; `desc` only flips defined values.
fn compare_guests(a: &ListingCard, b: &ListingCard, desc: bool) -> Ordering {
    match (a.guest_capacity, b.guest_capacity) {
        (Some(x), Some(y)) if desc => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (x, y) => x.is_none().cmp(&y.is_none()),
    }
}

/// Reorders `items` in place. Membership never changes and ties keep their
/// current relative order (`sort_by` is stable).
pub fn sort_cards<T: AsListingCard>(items: &mut [T], mode: SortMode) {
    match mode {
        SortMode::Featured => {}
        SortMode::GuestsAsc => items.sort_by(|a, b| compare_guests(a.card(), b.card(), false)),
        SortMode::GuestsDesc => items.sort_by(|a, b| compare_guests(a.card(), b.card(), true)),
        SortMode::ZoneAsc => items.sort_by(|a, b| compare_base(&a.card().zone, &b.card().zone)),
        SortMode::NameAsc => items.sort_by(|a, b| {
            compare_base(&a.card().display_name, &b.card().display_name)
        }),
    }
}
