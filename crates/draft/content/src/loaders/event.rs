//! Event fixture loader.
//!
//! A fixture holds one event's completed bouts, the salaries fighters were
//! priced at, and the rosters users entered. Stored rosters reference power-up
//! cards by id; [`RosterRecord::resolve`] turns them into scoring-ready
//! [`Roster`]s.

use std::collections::BTreeMap;
use std::path::Path;

use draft_core::{EventContext, Fight, Fighter, FighterId, Roster, RosterPowerUp};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::loaders::{CardCatalog, LoadResult, read_file};

// ============================================================================
// Records
// ============================================================================

/// A card pick as stored on a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerUpSelection {
    pub card_id: String,
    pub fighter_id: FighterId,
}

/// A roster as stored, before card resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    /// Falls back to the fixture's event id when empty.
    #[serde(default)]
    pub event_id: String,
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub captain_id: Option<FighterId>,
    #[serde(default)]
    pub power_ups: Vec<PowerUpSelection>,
}

impl RosterRecord {
    /// Resolve card picks against `catalog`.
    ///
    /// Unknown card ids are an error. Retired cards stay on rosters that
    /// already hold them and are only logged. A card whose config does not
    /// match its effect type resolves with no effect.
    pub fn resolve(&self, catalog: &CardCatalog) -> LoadResult<Roster> {
        let mut roster = Roster::new(self.id.clone(), self.fighters.clone())
            .with_owner(self.user_id.clone(), self.event_id.clone());
        roster.captain_id = self.captain_id.clone();

        for pick in &self.power_ups {
            let card = catalog.get(&pick.card_id).ok_or_else(|| {
                anyhow::anyhow!(
                    "Roster {} references unknown power-up card {}",
                    self.id,
                    pick.card_id
                )
            })?;
            if !card.is_active {
                warn!(roster = %self.id, card = %card.id, "roster holds a retired power-up card");
            }
            roster = roster.with_power_up(RosterPowerUp::from_card(card, pick.fighter_id.clone()));
        }

        Ok(roster)
    }
}

/// One event's results and entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFixture {
    pub event_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fights: Vec<Fight>,
    /// Fighter salaries for this card.
    #[serde(default)]
    pub salaries: BTreeMap<FighterId, u32>,
    #[serde(default)]
    pub rosters: Vec<RosterRecord>,
}

impl EventFixture {
    /// Salaries and bout pairings for contextual roster validation.
    pub fn context(&self) -> EventContext {
        self.salaries.iter().fold(
            EventContext::from_fights(&self.fights),
            |context, (fighter_id, salary)| context.with_salary(fighter_id.clone(), *salary),
        )
    }

    /// Resolve every roster against `catalog`, in file order.
    pub fn resolve_rosters(&self, catalog: &CardCatalog) -> LoadResult<Vec<Roster>> {
        self.rosters
            .iter()
            .map(|record| {
                let mut roster = record.resolve(catalog)?;
                if roster.event_id.is_empty() {
                    roster.event_id = self.event_id.clone();
                }
                Ok(roster)
            })
            .collect()
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Loader for event fixtures from TOML files.
pub struct EventLoader;

impl EventLoader {
    /// Load an event fixture from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing an EventFixture
    ///
    /// # Returns
    ///
    /// Returns the fixture with card references still unresolved.
    pub fn load(path: &Path) -> LoadResult<EventFixture> {
        let content = read_file(path)?;
        let fixture = Self::parse(&content)?;
        info!(
            path = %path.display(),
            event = %fixture.event_id,
            fights = fixture.fights.len(),
            rosters = fixture.rosters.len(),
            "loaded event fixture"
        );
        Ok(fixture)
    }

    /// Parse an event fixture from TOML text.
    pub fn parse(content: &str) -> LoadResult<EventFixture> {
        let fixture: EventFixture = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse event TOML: {}", e))?;

        for fight in &fixture.fights {
            if let Some(winner) = &fight.winner_id {
                if !fight.involves(winner.as_str()) {
                    anyhow::bail!("Fight {} lists winner {} who is not in the bout", fight.id, winner);
                }
            }
        }

        Ok(fixture)
    }
}
