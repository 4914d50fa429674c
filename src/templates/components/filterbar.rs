use maud::{html, Markup};

use crate::listings::{Controller, SortMode};
use crate::query::{link_after, RESULTS_ANCHOR};
use crate::timer::Millis;

/// Range buttons, search box, sort selector, "show all" and the results summary.
/// Every link is the page as it would be after that interaction.
pub fn filterbar(controller: &Controller, now: Millis) -> Markup {
    let show_all = link_after(controller, now, |c, now| {
        c.show_all(now);
        Vec::new()
    });

    html! {
        div class="option-cards" id="fasce" {
            @for (i, option) in controller.options().iter().enumerate() {
                @let active = controller.is_option_active(option);
                @let link = link_after(controller, now, |c, now| c.select_option(i, now));
                a.option-card.is-active[active]
                    href=(link.href)
                    data-scroll=[link.scroll.map(scroll_behavior)]
                    data-min=(option.range.min)
                    data-max=(option.range.max)
                    aria-pressed=(if active { "true" } else { "false" })
                {
                    (option.label)
                }
            }
        }

        form class="filterbar" method="get" action={ "/#" (RESULTS_ANCHOR) } {
            @if let Some(range) = controller.state().active_range {
                input type="hidden" name="range" value=(range.as_param());
            }
            label class="sr-only" for="searchInput" { "Cerca" }
            input type="search" id="searchInput" name="q"
                placeholder="Cerca per nome o zona"
                value=(controller.search_input());

            label class="sr-only" for="sortSelect" { "Ordina" }
            select id="sortSelect" name="sort" {
                @for mode in SortMode::ALL {
                    option value=(mode.as_str()) selected[mode == controller.sort_mode()] {
                        (mode.label())
                    }
                }
            }

            button type="submit" class="btn" { "Applica" }
            a class="btn btn--ghost" id="btnShowAll" href=(show_all.href)
                hidden[!controller.show_all_visible()]
            {
                "Mostra tutte"
            }
        }

        @if let Some(summary) = controller.summary() {
            p class="results" id="resultsMeta" { (summary) }
        }
    }
}

/// CSS `scroll-behavior` value for a scroll effect.
fn scroll_behavior(smooth: bool) -> &'static str {
    if smooth {
        "smooth"
    } else {
        "auto"
    }
}
