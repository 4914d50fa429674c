// templates/pages/home.rs

use maud::{html, Markup};

use crate::listings::Controller;
use crate::site::slider::HeroSlider;
use crate::timer::Millis;
use crate::templates::{
    components::{filterbar, hero, property_card, request_form},
    desktop_layout,
};

pub struct HomeVm<'a> {
    /// `None` when the catalog has no cards.
    pub controller: Option<&'a Controller>,
    /// Page clock the controller was built at.
    pub now: Millis,
    pub slider: Option<&'a HeroSlider>,
    pub default_wa_link: String,
    pub year: i32,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Case vacanza a Gallipoli",
        vm.year,
        &vm.default_wa_link,
        html! {
            (hero(vm.slider, &vm.default_wa_link))

            main class="container" {
                section id="case" {
                    div class="section__head" {
                        h2 { "Case consigliate" }
                    }

                    @match vm.controller {
                        Some(controller) => {
                            (filterbar(controller, vm.now))
                            div class="cards" id="cardsGrid" {
                                @for (index, card, visibility) in controller.cards_in_order() {
                                    (property_card(index, card, visibility))
                                }
                            }
                        }
                        None => {
                            p class="empty" { "Nessuna casa disponibile al momento." }
                        }
                    }
                }

                section id="richiesta" {
                    h2 { "Richiedi una proposta" }
                    (request_form())
                }
            }
        },
    )
}
