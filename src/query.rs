// src/query.rs
//! Listing state carried in the URL, so the page works without scripts.

use url::form_urlencoded;

use crate::listings::{Controller, Effect, GuestRange, ListingCard, PageHooks, SortMode};
use crate::timer::Millis;

/// Fragment of the results section, the target of `Effect::ScrollToResults`.
pub const RESULTS_ANCHOR: &str = "case";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub range: Option<GuestRange>,
    pub search: String,
    pub sort: SortMode,
}

impl ListingQuery {
    /// Unknown keys and unparseable values are ignored.
    pub fn parse(query: Option<&str>) -> Self {
        let mut out = Self::default();
        let Some(query) = query else {
            return out;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "range" => out.range = GuestRange::parse(&value),
                "q" => out.search = value.trim().to_string(),
                "sort" => out.sort = SortMode::from_param(&value),
                _ => {}
            }
        }
        out
    }

    /// The query that reproduces `controller`'s current criteria and order.
    pub fn from_controller(controller: &Controller) -> Self {
        Self {
            range: controller.state().active_range,
            search: controller.search_input().trim().to_string(),
            sort: controller.sort_mode(),
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if let Some(range) = self.range {
            ser.append_pair("range", &range.as_param());
        }
        if !self.search.is_empty() {
            ser.append_pair("q", &self.search);
        }
        if self.sort != SortMode::Featured {
            ser.append_pair("sort", self.sort.as_str());
        }
        ser.finish()
    }

    pub fn href(&self, path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{qs}")
        }
    }

    /// Replays the query as interactions on a fresh controller, then lets every
    /// timer run out so the result is what a visitor sees once the page is idle.
    pub fn controller(
        &self,
        cards: &[ListingCard],
        reduced_motion: bool,
        now: Millis,
    ) -> Option<Controller> {
        let mut controller = Controller::attach(cards.to_vec(), PageHooks::all(), now)?
            .with_reduced_motion(reduced_motion);

        controller.change_sort(self.sort, now);
        if let Some(range) = self.range {
            controller.select_range(range, now);
        }
        if !self.search.is_empty() {
            controller.input_search(&self.search, now);
        }
        controller.settle(now);
        Some(controller)
    }
}

/// A plain link standing in for one interaction on the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLink {
    pub href: String,
    /// `Some(smooth)` when following the link should land on the results.
    pub scroll: Option<bool>,
}

/// Applies `interact` to a copy of `controller` and links to the resulting state.
/// A scroll effect becomes the results fragment.
pub fn link_after<F>(controller: &Controller, now: Millis, interact: F) -> ListingLink
where
    F: FnOnce(&mut Controller, Millis) -> Vec<Effect>,
{
    let mut next = controller.clone();
    let effects = interact(&mut next, now);

    let scroll = effects.iter().find_map(|effect| match effect {
        Effect::ScrollToResults { smooth } => Some(*smooth),
    });

    let mut href = ListingQuery::from_controller(&next).href("/");
    if scroll.is_some() {
        href.push('#');
        href.push_str(RESULTS_ANCHOR);
    }

    ListingLink { href, scroll }
}
