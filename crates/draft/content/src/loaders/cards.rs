//! Power-up card catalog loader.

use std::path::Path;

use draft_core::PowerUpCard;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::loaders::{LoadResult, read_file};

/// Power-up cards as stored in TOML (`[[cards]]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardCatalog {
    #[serde(default)]
    pub cards: Vec<PowerUpCard>,
}

impl CardCatalog {
    pub fn new(cards: Vec<PowerUpCard>) -> Self {
        Self { cards }
    }

    /// The four launch cards.
    pub fn presets() -> Self {
        Self::new(PowerUpCard::presets().into())
    }

    pub fn get(&self, card_id: &str) -> Option<&PowerUpCard> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// Cards that can still be picked for new rosters.
    pub fn active(&self) -> impl Iterator<Item = &PowerUpCard> {
        self.cards.iter().filter(|card| card.is_active)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Loader for card catalogs from TOML files.
pub struct CardCatalogLoader;

impl CardCatalogLoader {
    /// Load a card catalog from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing `[[cards]]` entries
    ///
    /// # Returns
    ///
    /// Returns the catalog. Duplicate card ids are rejected.
    pub fn load(path: &Path) -> LoadResult<CardCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;
        info!(
            path = %path.display(),
            cards = catalog.len(),
            active = catalog.active().count(),
            "loaded power-up cards"
        );
        Ok(catalog)
    }

    /// Parse a card catalog from TOML text.
    pub fn parse(content: &str) -> LoadResult<CardCatalog> {
        let catalog: CardCatalog = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog TOML: {}", e))?;

        for (index, card) in catalog.cards.iter().enumerate() {
            if catalog.cards[..index].iter().any(|seen| seen.id == card.id) {
                anyhow::bail!("Duplicate power-up card id: {}", card.id);
            }
            if card.effect().is_none() {
                warn!(
                    card = %card.id,
                    effect_type = %card.effect_type,
                    "card config does not match its effect type; it will score as neutral"
                );
            }
        }

        Ok(catalog)
    }
}
