//! Event XP and level progression.
//!
//! A user earns participation XP for every event, plus captain bonuses when
//! their captain wins. Levels come from a threshold ladder in [`XpTable`].

use crate::config::{DraftConfig, LevelThreshold, XpTable};
use crate::domain::{Fight, FightMethod, Roster};

// ============================================================================
// Inputs & Results
// ============================================================================

/// What the XP award depends on: the captain's result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EventXpInput {
    pub captain_won: bool,
    /// Only consulted when `captain_won`.
    pub captain_method: Option<FightMethod>,
}

impl EventXpInput {
    /// Derives the input from the captain's bout among `fights`.
    ///
    /// Returns `None` when the roster has no captain on it. A captain without
    /// a bout on the card counts as not having won.
    pub fn for_captain(roster: &Roster, fights: &[Fight]) -> Option<Self> {
        let captain = roster.captain()?;
        let id = captain.id.as_str();
        let input = fights
            .iter()
            .find(|fight| fight.involves(id))
            .map(|fight| {
                let won = fight.did_fighter_win(id);
                Self {
                    captain_won: won,
                    captain_method: won.then_some(fight.method),
                }
            })
            .unwrap_or_default();
        Some(input)
    }
}

/// XP earned at one event, itemised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct XpAward {
    pub base: u32,
    pub captain_win_bonus: u32,
    pub method_bonus: u32,
    pub total: u32,
}

/// A user's standing before and after an award.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LevelChange {
    pub previous_level: u32,
    pub new_level: u32,
    pub previous_total_xp: u32,
    pub new_total_xp: u32,
    pub xp_to_next_level: u32,
    pub level_progress: u32,
    pub leveled_up: bool,
}

// ============================================================================
// XP Calculator
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XpCalculator {
    table: XpTable,
}

impl XpCalculator {
    pub fn new(table: XpTable) -> Self {
        Self { table }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.xp.clone())
    }

    pub fn table(&self) -> &XpTable {
        &self.table
    }

    /// Itemised XP for one event.
    pub fn award(&self, input: &EventXpInput) -> XpAward {
        let base = self.table.participation;
        let (captain_win_bonus, method_bonus) = if input.captain_won {
            let method = input
                .captain_method
                .map_or(0, |m| self.table.method_bonus(m));
            (self.table.captain_win, method)
        } else {
            (0, 0)
        };
        XpAward {
            base,
            captain_win_bonus,
            method_bonus,
            total: base + captain_win_bonus + method_bonus,
        }
    }

    /// Total XP for one event.
    pub fn calculate_event_xp(&self, input: &EventXpInput) -> u32 {
        self.award(input).total
    }

    /// Highest level whose threshold is at or below `total_xp`.
    pub fn calculate_level(&self, total_xp: u32) -> u32 {
        self.current_threshold(total_xp).map_or(1, |t| t.level)
    }

    /// XP still needed for the next level, 0 at the top level.
    pub fn xp_to_next_level(&self, current_xp: u32) -> u32 {
        self.next_threshold(current_xp)
            .map_or(0, |next| next.xp.saturating_sub(current_xp))
    }

    /// Whole-percent progress through the current level, 100 at the top level.
    ///
    /// # Formula
    ///
    /// `floor((xp - current.xp) * 100 / (next.xp - current.xp))`
    pub fn level_progress(&self, current_xp: u32) -> u32 {
        let (Some(current), Some(next)) = (
            self.current_threshold(current_xp),
            self.next_threshold(current_xp),
        ) else {
            return 100;
        };
        let earned = u64::from(current_xp - current.xp);
        let span = u64::from(next.xp.saturating_sub(current.xp));
        // span > 0 for a validated table; fall back to complete otherwise.
        (earned * 100)
            .checked_div(span)
            .map_or(100, |pct| pct.min(100) as u32)
    }

    /// Adds `award` to `previous_total_xp` and reports the level movement.
    pub fn apply_award(&self, previous_total_xp: u32, award: &XpAward) -> LevelChange {
        let new_total_xp = previous_total_xp.saturating_add(award.total);
        let previous_level = self.calculate_level(previous_total_xp);
        let new_level = self.calculate_level(new_total_xp);
        LevelChange {
            previous_level,
            new_level,
            previous_total_xp,
            new_total_xp,
            xp_to_next_level: self.xp_to_next_level(new_total_xp),
            level_progress: self.level_progress(new_total_xp),
            leveled_up: new_level > previous_level,
        }
    }

    fn current_threshold(&self, xp: u32) -> Option<LevelThreshold> {
        self.table
            .levels
            .iter()
            .take_while(|t| t.xp <= xp)
            .last()
            .copied()
    }

    fn next_threshold(&self, xp: u32) -> Option<LevelThreshold> {
        let level = self.calculate_level(xp);
        self.table
            .levels
            .iter()
            .find(|t| t.level == level + 1)
            .copied()
    }
}
