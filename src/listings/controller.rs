// src/listings/controller.rs

use crate::listings::card::ListingCard;
use crate::listings::filter::{matches, FilterState, GuestRange};
use crate::listings::presenter::{render_meta, Presenter, Visibility};
use crate::listings::sort::{sort_cards, SortMode};
use crate::timer::{Debouncer, Millis};

/// Quiet window after the last keystroke before the search term is applied.
pub const SEARCH_DEBOUNCE_MS: Millis = 80;

/// One guest-range button of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeOption {
    pub label: String,
    pub range: GuestRange,
}

impl RangeOption {
    pub fn new(range: GuestRange) -> Self {
        let label = if range.is_open_ended() {
            format!("{}+ posti", range.min)
        } else {
            format!("{}–{} posti", range.min, range.max)
        };
        Self { label, range }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(GuestRange::new(1, 4)),
            Self::new(GuestRange::new(5, 6)),
            Self::new(GuestRange::new(7, 8)),
            Self::new(GuestRange::open_ended(9)),
        ]
    }
}

/// Optional parts of the page. A missing hook switches its feature off; the rest
/// keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHooks {
    pub summary: bool,
    pub search_box: bool,
    pub sort_selector: bool,
    pub show_all_button: bool,
}

impl PageHooks {
    pub fn all() -> Self {
        Self {
            summary: true,
            search_box: true,
            sort_selector: true,
            show_all_button: true,
        }
    }

    pub fn none() -> Self {
        Self {
            summary: false,
            search_box: false,
            sort_selector: false,
            show_all_button: false,
        }
    }
}

impl Default for PageHooks {
    fn default() -> Self {
        Self::all()
    }
}

/// Side effects the host has to carry out after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollToResults { smooth: bool },
}

/// Sole owner of the filter state. Every change re-evaluates all cards and
/// refreshes visibility and the summary.
#[derive(Debug, Clone)]
pub struct Controller {
    cards: Vec<ListingCard>,
    /// Catalog indices in current display order.
    order: Vec<usize>,
    state: FilterState,
    sort_mode: SortMode,
    hooks: PageHooks,
    options: Vec<RangeOption>,
    search: Debouncer<String>,
    search_input: String,
    presenter: Presenter,
    summary: Option<String>,
    reduced_motion: bool,
    evaluations: usize,
}

impl Controller {
    /// Returns `None` when the page has no cards: filtering is not wired at all.
    pub fn attach(cards: Vec<ListingCard>, hooks: PageHooks, now: Millis) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }

        let mut controller = Self {
            order: (0..cards.len()).collect(),
            presenter: Presenter::new(cards.len()),
            cards,
            state: FilterState::default(),
            sort_mode: SortMode::Featured,
            hooks,
            options: RangeOption::defaults(),
            search: Debouncer::new(SEARCH_DEBOUNCE_MS),
            search_input: String::new(),
            summary: None,
            reduced_motion: false,
            evaluations: 0,
        };
        controller.apply(now);
        Some(controller)
    }

    pub fn with_options(mut self, options: Vec<RangeOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    // ---- interactions -------------------------------------------------------

    /// Clicking the active range clears it; any other range replaces it.
    pub fn select_range(&mut self, range: GuestRange, now: Millis) -> Vec<Effect> {
        if self.state.active_range == Some(range) {
            self.state.active_range = None;
        } else {
            self.state.active_range = Some(range);
        }

        self.apply(now);
        vec![Effect::ScrollToResults {
            smooth: !self.reduced_motion,
        }]
    }

    pub fn select_option(&mut self, index: usize, now: Millis) -> Vec<Effect> {
        match self.options.get(index) {
            Some(option) => {
                let range = option.range;
                self.select_range(range, now)
            }
            None => Vec::new(),
        }
    }

    /// Keystroke in the search box. The term is applied by [`Controller::advance`]
    /// once the debounce window has passed without further input.
    pub fn input_search(&mut self, text: &str, now: Millis) {
        if !self.hooks.search_box {
            return;
        }
        self.search_input = text.to_string();
        self.search.push(now, text.to_string());
    }

    /// Clears every criterion and the search box text.
    pub fn show_all(&mut self, now: Millis) {
        if !self.hooks.show_all_button {
            return;
        }
        self.state.clear();
        self.search.cancel();
        self.search_input.clear();
        self.apply(now);
    }

    pub fn change_sort(&mut self, mode: SortMode, now: Millis) {
        if !self.hooks.sort_selector {
            return;
        }
        self.sort_mode = mode;

        let mut keyed: Vec<(usize, &ListingCard)> =
            self.order.iter().map(|&i| (i, &self.cards[i])).collect();
        sort_cards(&mut keyed, mode);
        self.order = keyed.into_iter().map(|(i, _)| i).collect();

        // New order, same visibility rules.
        self.apply(now);
    }

    /// Drives time forward: fires the search debounce and pending removals.
    pub fn advance(&mut self, now: Millis) {
        if let Some(text) = self.search.poll(now) {
            self.state.set_search_term(&text);
            self.apply(now);
        }
        self.presenter.advance(now);
    }

    /// Runs every pending timer (search debounce, card removals) to completion and
    /// returns the clock value it stopped at. A server-rendered page is a settled page.
    pub fn settle(&mut self, now: Millis) -> Millis {
        let mut now = now;
        while let Some(at) = self.next_deadline() {
            now = now.max(at);
            self.advance(now);
        }
        now
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        [self.search.deadline(), self.presenter.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn apply(&mut self, now: Millis) {
        self.evaluations += 1;

        let mut shown = 0;
        for (index, card) in self.cards.iter().enumerate() {
            let ok = matches(card, &self.state);
            self.presenter.set_visible(index, ok, now);
            if ok {
                shown += 1;
            }
        }

        if self.hooks.summary {
            self.summary = Some(render_meta(shown, self.cards.len(), &self.state));
        }

        tracing::debug!(
            shown,
            total = self.cards.len(),
            range = ?self.state.active_range,
            term = self.state.search_term(),
            "filters applied"
        );
    }

    // ---- read side ----------------------------------------------------------

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn options(&self) -> &[RangeOption] {
        &self.options
    }

    pub fn is_option_active(&self, option: &RangeOption) -> bool {
        self.state.active_range == Some(option.range)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Number of full filter passes so far (the initial pass included).
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn shown_count(&self) -> usize {
        self.presenter.shown_count()
    }

    /// The "show all" control is offered only while a criterion is active.
    pub fn show_all_visible(&self) -> bool {
        self.hooks.show_all_button && self.state.is_active()
    }

    /// Every card in display order with its catalog index and visibility.
    pub fn cards_in_order(&self) -> impl Iterator<Item = (usize, &ListingCard, Visibility)> + '_ {
        self.order.iter().map(move |&i| {
            let visibility = self.presenter.visibility(i).unwrap_or(Visibility::Shown);
            (i, &self.cards[i], visibility)
        })
    }

    pub fn visible_cards(&self) -> Vec<(usize, &ListingCard)> {
        self.cards_in_order()
            .filter(|(_, _, v)| v.is_visible())
            .map(|(i, card, _)| (i, card))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::presenter::REMOVE_DELAY_MS;

    fn card(name: &str, zone: &str, guests: Option<u32>) -> ListingCard {
        ListingCard {
            guest_capacity: guests,
            guests_label: guests.map(|g| g.to_string()).unwrap_or_default(),
            zone: zone.to_string(),
            display_name: name.to_string(),
            searchable_text: format!("{name} {zone}"),
            details_link: None,
        }
    }

    fn four_cards() -> Vec<ListingCard> {
        vec![
            card("Vela", "Alezio", Some(2)),
            card("Ulivi", "Baia Verde", Some(6)),
            card("Trullo", "Rivabella", None),
            card("Scogli", "Gallipoli Centro", Some(9)),
        ]
    }

    fn controller() -> Controller {
        Controller::attach(four_cards(), PageHooks::all(), 0).unwrap()
    }

    fn visible_names(c: &Controller) -> Vec<String> {
        c.visible_cards()
            .into_iter()
            .map(|(_, card)| card.display_name.clone())
            .collect()
    }

    fn order_names(c: &Controller) -> Vec<String> {
        c.cards_in_order()
            .map(|(_, card, _)| card.display_name.clone())
            .collect()
    }

    #[test]
    fn starts_with_everything_shown() {
        let c = controller();
        assert_eq!(c.shown_count(), 4);
        assert_eq!(c.summary(), Some("Mostrando 4 su 4. Tutte le fasce"));
        assert!(!c.show_all_visible());
        assert_eq!(c.evaluations(), 1);
    }

    #[test]
    fn range_five_to_six_shows_one_of_four() {
        let mut c = controller();
        let effects = c.select_range(GuestRange::new(5, 6), 10);

        assert_eq!(effects, vec![Effect::ScrollToResults { smooth: true }]);
        assert_eq!(visible_names(&c), ["Ulivi"]);
        let summary = c.summary().unwrap();
        assert!(summary.contains("1 su 4"), "{summary}");
        assert!(summary.contains("5–6 posti"), "{summary}");
        assert!(c.show_all_visible());
    }

    #[test]
    fn selecting_same_range_twice_clears_it() {
        let mut c = controller();
        c.select_range(GuestRange::new(5, 6), 10);
        c.select_range(GuestRange::new(5, 6), 20);

        assert_eq!(c.state().active_range, None);
        assert_eq!(c.shown_count(), 4);
        assert!(c.options().iter().all(|o| !c.is_option_active(o)));
        assert!(!c.show_all_visible());
    }

    #[test]
    fn selecting_another_range_replaces_it() {
        let mut c = controller();
        c.select_option(1, 0);
        c.select_option(3, 0);

        assert_eq!(c.state().active_range, Some(GuestRange::open_ended(9)));
        assert!(c.is_option_active(&c.options()[3]));
        assert!(!c.is_option_active(&c.options()[1]));
        assert_eq!(visible_names(&c), ["Scogli"]);
    }

    #[test]
    fn search_is_debounced_to_the_last_input() {
        let mut c = controller();
        let before = c.evaluations();

        c.input_search("ali", 1_000);
        c.input_search("Gallipoli", 1_020);

        c.advance(1_080);
        assert_eq!(c.evaluations(), before);

        c.advance(1_100);
        assert_eq!(c.evaluations(), before + 1);
        assert_eq!(c.state().search_term(), "gallipoli");
        assert_eq!(visible_names(&c), ["Scogli"]);

        c.advance(2_000);
        assert_eq!(c.evaluations(), before + 1);
    }

    #[test]
    fn show_all_resets_everything() {
        let mut c = controller();
        c.select_range(GuestRange::new(1, 4), 0);
        c.input_search("vela", 0);
        c.advance(80);
        assert_eq!(c.shown_count(), 1);

        c.input_search("velaa", 100);
        c.show_all(120);
        c.advance(500);

        assert_eq!(c.state(), &FilterState::default());
        assert_eq!(c.search_input(), "");
        assert_eq!(c.shown_count(), 4);
        assert!(!c.show_all_visible());
    }

    #[test]
    fn hidden_cards_are_removed_after_delay() {
        let mut c = controller();
        c.select_range(GuestRange::new(5, 6), 0);

        let trullo = c.cards_in_order().find(|(_, card, _)| card.display_name == "Trullo");
        assert_eq!(trullo.map(|(_, _, v)| v), Some(Visibility::Hiding));

        c.advance(220);
        let gone = c
            .cards_in_order()
            .filter(|(_, _, v)| *v == Visibility::Removed)
            .count();
        assert_eq!(gone, 3);
    }

    #[test]
    fn sort_then_filter_keeps_order_and_rules() {
        let mut c = controller();
        c.select_range(GuestRange::new(1, 9), 0);
        c.change_sort(SortMode::GuestsDesc, 10);

        let order = order_names(&c);
        assert_eq!(order, ["Scogli", "Ulivi", "Vela", "Trullo"]);
        assert_eq!(visible_names(&c), ["Scogli", "Ulivi", "Vela"]);

        c.change_sort(SortMode::Featured, 20);
        let again = order_names(&c);
        assert_eq!(again, order);
    }

    #[test]
    fn missing_hooks_disable_features_silently() {
        let mut c = Controller::attach(four_cards(), PageHooks::none(), 0).unwrap();

        c.input_search("vela", 0);
        c.advance(1_000);
        c.change_sort(SortMode::NameAsc, 1_000);

        assert_eq!(c.summary(), None);
        assert_eq!(c.state().search_term(), "");
        assert_eq!(c.sort_mode(), SortMode::Featured);

        c.select_range(GuestRange::new(5, 6), 1_000);
        assert_eq!(c.shown_count(), 1);
        assert!(!c.show_all_visible());
    }

    #[test]
    fn settle_applies_pending_search_and_removals() {
        let mut c = controller();
        c.select_range(GuestRange::new(1, 9), 0);
        c.input_search("baia", 0);
        assert_eq!(c.next_deadline(), Some(SEARCH_DEBOUNCE_MS));

        let done = c.settle(0);
        assert_eq!(done, SEARCH_DEBOUNCE_MS + REMOVE_DELAY_MS);
        assert_eq!(c.next_deadline(), None);
        assert_eq!(visible_names(&c), ["Ulivi"]);

        let removed = c
            .cards_in_order()
            .filter(|(_, _, v)| *v == Visibility::Removed)
            .count();
        assert_eq!(removed, 3);
    }

    #[test]
    fn no_cards_means_no_controller() {
        assert!(Controller::attach(Vec::new(), PageHooks::all(), 0).is_none());
    }

    #[test]
    fn reduced_motion_scrolls_without_animation() {
        let mut c = controller().with_reduced_motion(true);
        let effects = c.select_option(0, 0);
        assert_eq!(effects, vec![Effect::ScrollToResults { smooth: false }]);
    }
}
