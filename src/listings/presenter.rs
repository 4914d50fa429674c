// src/listings/presenter.rs

use crate::listings::filter::FilterState;
use crate::timer::{Millis, Timer};

/// Delay between "hidden" (fade-out starts) and "removed" (out of the layout).
pub const REMOVE_DELAY_MS: Millis = 220;

/// Visibility of a single card. Hiding goes through `Hiding` before `Removed`
/// so the fade-out transition can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hiding,
    Removed,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Shown)
    }

    /// CSS classes carried by the card element in this state.
    pub fn classes(&self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hiding => "is-hidden",
            Visibility::Removed => "is-hidden is-gone",
        }
    }
}

#[derive(Debug, Clone)]
struct CardSlot {
    visibility: Visibility,
    removal: Timer,
}

/// Per-card visibility, indexed by the card's position in the catalog.
#[derive(Debug, Clone)]
pub struct Presenter {
    slots: Vec<CardSlot>,
}

impl Presenter {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![
                CardSlot {
                    visibility: Visibility::Shown,
                    removal: Timer::new(),
                };
                count
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.slots.get(index).map(|s| s.visibility)
    }

    /// Showing is immediate and drops any pending removal. Hiding marks the card
    /// hidden and schedules the removal; repeating the same call changes nothing.
    pub fn set_visible(&mut self, index: usize, visible: bool, now: Millis) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match (visible, slot.visibility) {
            (true, _) => {
                slot.removal.cancel();
                slot.visibility = Visibility::Shown;
            }
            (false, Visibility::Shown) => {
                slot.visibility = Visibility::Hiding;
                slot.removal.start(now, REMOVE_DELAY_MS);
            }
            (false, Visibility::Hiding | Visibility::Removed) => {}
        }
    }

    /// Applies removals whose delay has elapsed. Returns how many cards were removed.
    pub fn advance(&mut self, now: Millis) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.removal.fire_if_due(now) && slot.visibility == Visibility::Hiding {
                slot.visibility = Visibility::Removed;
                removed += 1;
            }
        }
        removed
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.slots.iter().filter_map(|s| s.removal.deadline()).min()
    }

    pub fn shown_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.visibility.is_visible())
            .count()
    }
}

/// "5–6 posti", "9+ posti", or `None` when no range is active.
pub fn range_label(state: &FilterState) -> Option<String> {
    state.active_range.map(|r| {
        if r.is_open_ended() {
            format!("{}+ posti", r.min)
        } else {
            format!("{}–{} posti", r.min, r.max)
        }
    })
}

/// Results summary shown above the grid.
pub fn render_meta(shown: usize, total: usize, state: &FilterState) -> String {
    let range = range_label(state)
        .map(|label| format!("Fascia: {label}"))
        .unwrap_or_else(|| "Tutte le fasce".to_string());

    let search = if state.search_term().is_empty() {
        String::new()
    } else {
        format!(" • Ricerca: \"{}\"", state.search_term())
    };

    format!("Mostrando {shown} su {total}. {range}{search}")
}
