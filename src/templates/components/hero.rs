use maud::{html, Markup};

use crate::site::slider::HeroSlider;

pub const HERO_IMAGES: [&str; 3] = [
    "img/hero-baia-verde.jpg",
    "img/hero-centro-storico.jpg",
    "img/hero-tramonto.jpg",
];

/// Hero with its slides. Without a running slider the first slide stays active.
pub fn hero(slider: Option<&HeroSlider>, wa_link: &str) -> Markup {
    let active = slider.map_or(0, HeroSlider::active);

    html! {
        section class="hero" {
            div class="hero__slides" {
                @for (k, src) in HERO_IMAGES.iter().enumerate() {
                    div.hero-slide.is-active[k == active] {
                        img src=(src) alt="" loading="lazy" decoding="async";
                    }
                }
            }
            div class="hero__grid" {
                h1 { "Case e ville vacanza a Gallipoli" }
                p { "Scegli la fascia di ospiti, noi ti proponiamo la casa giusta." }
                a class="btn btn--wa" id="waHero" href=(wa_link) target="_blank" rel="noopener" {
                    "Scrivici su WhatsApp"
                }
            }
        }
    }
}
