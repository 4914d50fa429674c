// src/site/slider.rs
use crate::timer::{Interval, Millis};

pub const SLIDE_PERIOD_MS: Millis = 5_200;

/// Hero image slider: one active slide, advanced on a fixed period.
#[derive(Debug, Clone)]
pub struct HeroSlider {
    slides: usize,
    active: usize,
    interval: Interval,
}

impl HeroSlider {
    /// Not started with fewer than two slides or when reduced motion is requested.
    pub fn start(slides: usize, reduced_motion: bool, now: Millis) -> Option<Self> {
        if slides <= 1 || reduced_motion {
            return None;
        }
        Some(Self {
            slides,
            active: 0,
            interval: Interval::new(now, SLIDE_PERIOD_MS),
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.active
    }

    /// Advances by however many periods have elapsed; returns the new active slide
    /// when it changed.
    pub fn tick(&mut self, now: Millis) -> Option<usize> {
        let steps = self.interval.ticks(now);
        if steps == 0 {
            return None;
        }
        let before = self.active;
        self.active = (self.active + (steps % self.slides as u64) as usize) % self.slides;
        (self.active != before).then_some(self.active)
    }
}
