// src/app.rs
use std::time::Instant;

use crate::config::SiteConfig;
use crate::listings::Catalog;
use crate::site::WhatsAppLinks;
use crate::timer::Millis;

/// Read-only state shared by all request workers.
#[derive(Debug)]
pub struct App {
    pub catalog: Catalog,
    pub whatsapp: WhatsAppLinks,
    pub reduced_motion: bool,
    started: Instant,
}

impl App {
    pub fn new(catalog: Catalog, cfg: &SiteConfig) -> Self {
        Self {
            catalog,
            whatsapp: WhatsAppLinks::new(cfg.whatsapp_number.clone()),
            reduced_motion: cfg.reduced_motion,
            started: Instant::now(),
        }
    }

    /// Page clock: milliseconds since the server started.
    pub fn now(&self) -> Millis {
        self.started.elapsed().as_millis() as Millis
    }
}
