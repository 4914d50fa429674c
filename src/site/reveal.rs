// src/site/reveal.rs

/// Share of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Elements that fade in on first scroll into view.
pub const REVEAL_TARGETS: &str =
    ".hero__grid, .section__head, .step, .option-card, .filterbar, .property-card, .form";

/// One-shot reveal tracking. Once an element is `in` it stays `in`.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Disabled with reduced motion or when the host has no intersection observer.
    pub fn new(targets: usize, reduced_motion: bool, has_observer: bool) -> Option<Self> {
        if reduced_motion || !has_observer {
            return None;
        }
        Some(Self {
            revealed: vec![false; targets],
        })
    }

    /// Intersection report for one target. Returns true when it just became `in`.
    pub fn observe(&mut self, target: usize, ratio: f64) -> bool {
        match self.revealed.get_mut(target) {
            Some(seen) if !*seen && ratio >= REVEAL_THRESHOLD => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.get(target).copied().unwrap_or(false)
    }

    /// Class list for a target: `reveal`, plus `in` once seen.
    pub fn classes(&self, target: usize) -> &'static str {
        if self.is_revealed(target) {
            "reveal in"
        } else {
            "reveal"
        }
    }
}
