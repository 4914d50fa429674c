// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Placeholder recipient; set WHATSAPP_NUMBER in any real deployment.
const PLACEHOLDER_NUMBER: &str = "390000000000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {reason}")]
    BindAddr { value: String, reason: String },

    #[error("Invalid MAX_WORKERS {0:?}: expected a positive integer")]
    MaxWorkers(String),

    #[error("Invalid WHATSAPP_NUMBER {0:?}: use international digits only, no '+' or spaces")]
    WhatsAppNumber(String),
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub listings_path: PathBuf,
    pub whatsapp_number: String,
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            listings_path: PathBuf::from("site/listings.html"),
            whatsapp_number: PLACEHOLDER_NUMBER.to_string(),
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] but with an injectable lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(value) = lookup("BIND_ADDR") {
            cfg.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::BindAddr {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("MAX_WORKERS") {
            cfg.max_workers = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::MaxWorkers(value))?;
        }

        if let Some(value) = lookup("LISTINGS_PATH") {
            cfg.listings_path = PathBuf::from(value);
        }

        match lookup("WHATSAPP_NUMBER") {
            Some(value) => cfg.whatsapp_number = validate_number(&value)?,
            None => tracing::warn!(
                "⚠️ WHATSAPP_NUMBER not set, using placeholder {PLACEHOLDER_NUMBER}"
            ),
        }

        if let Some(value) = lookup("REDUCED_MOTION") {
            cfg.reduced_motion = matches!(value.trim(), "1" | "true" | "yes");
        }

        Ok(cfg)
    }
}

fn validate_number(raw: &str) -> Result<String, ConfigError> {
    let number = raw.trim();
    if number.len() < 6 || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::WhatsAppNumber(raw.to_string()));
    }
    Ok(number.to_string())
}
