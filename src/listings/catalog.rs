// src/listings/catalog.rs
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::listings::card::{extract_cards, ListingCard};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read listings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid card selector: {0}")]
    Selector(String),
}

/// The fixed set of listing cards, read once from the host document at start-up.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<ListingCard>,
}

impl Catalog {
    pub fn new(cards: Vec<ListingCard>) -> Self {
        Self { cards }
    }

    pub fn from_html(html: &str) -> Result<Self, CatalogError> {
        extract_cards(html).map(Self::new)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let html = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_html(&html)?;
        tracing::info!(
            "✅ Loaded {} listing cards from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn cards(&self) -> &[ListingCard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&ListingCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
