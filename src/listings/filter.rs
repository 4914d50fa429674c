// src/listings/filter.rs

use serde::Serialize;

use crate::listings::card::ListingCard;

/// Ranges whose upper bound reaches this value are shown as open-ended ("9+").
pub const OPEN_ENDED_MAX: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuestRange {
    pub min: u32,
    pub max: u32,
}

impl GuestRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn open_ended(min: u32) -> Self {
        Self {
            min,
            max: OPEN_ENDED_MAX,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.max >= OPEN_ENDED_MAX
    }

    pub fn contains(&self, guests: u32) -> bool {
        self.min <= guests && guests <= self.max
    }

    /// Parses "5-6", "5–6" or "9+".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(min) = raw.strip_suffix('+') {
            return min.trim().parse().ok().map(Self::open_ended);
        }

        let (min, max) = raw.split_once(['-', '–'])?;
        Some(Self::new(min.trim().parse().ok()?, max.trim().parse().ok()?))
    }

    /// Query-string form, inverse of [`GuestRange::parse`].
    pub fn as_param(&self) -> String {
        if self.is_open_ended() {
            format!("{}+", self.min)
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

/// Everything that decides which cards are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_range: Option<GuestRange>,
    search_term: String,
}

impl FilterState {
    pub fn with_range(range: GuestRange) -> Self {
        Self {
            active_range: Some(range),
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Stores the term trimmed and lower-cased; empty means inactive.
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
    }

    pub fn is_active(&self) -> bool {
        self.active_range.is_some() || !self.search_term.is_empty()
    }

    pub fn clear(&mut self) {
        self.active_range = None;
        self.search_term.clear();
    }
}

/// Range first, then search; both must pass when both are active.
pub fn matches(card: &ListingCard, state: &FilterState) -> bool {
    if let Some(range) = state.active_range {
        match card.guest_capacity {
            Some(guests) if range.contains(guests) => {}
            _ => return false,
        }
    }

    if !state.search_term.is_empty() && !card.haystack().contains(&state.search_term) {
        return false;
    }

    true
}
