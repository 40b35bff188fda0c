//! Fight outcome records and the read helpers scoring relies on.
//!
//! A [`Fight`] is a completed bout as delivered by ingestion. Per-fighter
//! maps (`stats`, `penalties`) are sparse: a missing entry means "all zero",
//! never an error.

use std::collections::{BTreeMap, BTreeSet};

use super::fighter::FighterId;

// ============================================================================
// Fight Method
// ============================================================================

/// How a bout ended.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightMethod {
    #[strum(serialize = "KO/TKO")]
    #[cfg_attr(feature = "serde", serde(rename = "KO/TKO"))]
    KoTko,
    Submission,
    Decision,
    #[strum(serialize = "DQ")]
    #[cfg_attr(feature = "serde", serde(rename = "DQ"))]
    Dq,
    #[strum(serialize = "No Contest")]
    #[cfg_attr(feature = "serde", serde(rename = "No Contest"))]
    NoContest,
    Draw,
}

impl FightMethod {
    /// True for methods that stop the fight inside the distance.
    ///
    /// Everything except `Decision` and `Draw` counts, including DQ and
    /// No Contest.
    #[inline]
    pub const fn is_finish(self) -> bool {
        !matches!(self, Self::Decision | Self::Draw)
    }
}

/// Judges' verdict for fights that go the distance.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionType {
    Unanimous,
    Split,
    Majority,
}

// ============================================================================
// Per-fighter records
// ============================================================================

/// In-fight statistics used for volume points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct FightStats {
    pub knockdowns: u32,
    pub takedowns: u32,
    pub submission_attempts: u32,
    pub significant_strikes: u32,
}

impl FightStats {
    pub const EMPTY: Self = Self {
        knockdowns: 0,
        takedowns: 0,
        submission_attempts: 0,
        significant_strikes: 0,
    };

    pub const fn new(
        knockdowns: u32,
        takedowns: u32,
        submission_attempts: u32,
        significant_strikes: u32,
    ) -> Self {
        Self {
            knockdowns,
            takedowns,
            submission_attempts,
            significant_strikes,
        }
    }
}

/// Promotion bonuses attached to a bout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct FightBonuses {
    /// Fight of the Night; both fighters receive it.
    pub fight_of_the_night: bool,
    /// Fighters awarded Performance of the Night.
    pub performance_bonus: BTreeSet<FighterId>,
}

/// Rule infractions recorded against one fighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct FighterPenalty {
    pub weight_miss: bool,
    pub point_deductions: u32,
}

// ============================================================================
// Fight
// ============================================================================

/// A completed bout between two fighters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Fight {
    pub id: String,
    pub fighter1_id: FighterId,
    pub fighter2_id: FighterId,
    /// `None` for draws and no contests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub winner_id: Option<FighterId>,
    pub method: FightMethod,
    #[cfg_attr(feature = "serde", serde(default))]
    pub decision_type: Option<DecisionType>,
    /// Round the fight ended in (1-5).
    pub round: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BTreeMap<FighterId, FightStats>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: FightBonuses,
    #[cfg_attr(feature = "serde", serde(default))]
    pub penalties: BTreeMap<FighterId, FighterPenalty>,
}

impl Fight {
    /// Creates a bout with no stats, bonuses, or penalties recorded.
    pub fn new(
        id: impl Into<String>,
        fighter1_id: impl Into<FighterId>,
        fighter2_id: impl Into<FighterId>,
        winner_id: Option<FighterId>,
        method: FightMethod,
        round: u8,
    ) -> Self {
        Self {
            id: id.into(),
            fighter1_id: fighter1_id.into(),
            fighter2_id: fighter2_id.into(),
            winner_id,
            method,
            decision_type: None,
            round,
            stats: BTreeMap::new(),
            bonuses: FightBonuses::default(),
            penalties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_decision(mut self, decision_type: DecisionType) -> Self {
        self.decision_type = Some(decision_type);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, fighter_id: impl Into<FighterId>, stats: FightStats) -> Self {
        self.stats.insert(fighter_id.into(), stats);
        self
    }

    #[must_use]
    pub fn with_fight_of_the_night(mut self) -> Self {
        self.bonuses.fight_of_the_night = true;
        self
    }

    #[must_use]
    pub fn with_performance_bonus(mut self, fighter_id: impl Into<FighterId>) -> Self {
        self.bonuses.performance_bonus.insert(fighter_id.into());
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, fighter_id: impl Into<FighterId>, penalty: FighterPenalty) -> Self {
        self.penalties.insert(fighter_id.into(), penalty);
        self
    }

    pub fn did_fighter_win(&self, fighter_id: &str) -> bool {
        self.winner_id.as_ref().is_some_and(|winner| winner == fighter_id)
    }

    pub fn is_draw(&self) -> bool {
        self.method == FightMethod::Draw
    }

    /// True when the bout ended inside the distance (not Decision or Draw).
    pub fn was_finished(&self) -> bool {
        self.method.is_finish()
    }

    pub fn involves(&self, fighter_id: &str) -> bool {
        self.fighter1_id == fighter_id || self.fighter2_id == fighter_id
    }

    /// The other participant, if `fighter_id` is in this bout.
    pub fn opponent_of(&self, fighter_id: &str) -> Option<&FighterId> {
        if self.fighter1_id == fighter_id {
            Some(&self.fighter2_id)
        } else if self.fighter2_id == fighter_id {
            Some(&self.fighter1_id)
        } else {
            None
        }
    }

    /// Stats for a fighter, all-zero when none were recorded.
    pub fn stats_for(&self, fighter_id: &str) -> FightStats {
        self.stats.get(fighter_id).copied().unwrap_or_default()
    }

    /// Penalties for a fighter, none when nothing was recorded.
    pub fn penalties_for(&self, fighter_id: &str) -> FighterPenalty {
        self.penalties.get(fighter_id).copied().unwrap_or_default()
    }

    pub fn received_performance_bonus(&self, fighter_id: &str) -> bool {
        self.bonuses.performance_bonus.contains(fighter_id)
    }

    /// Number of promotion bonuses this fighter collected (0-2).
    pub fn ufc_bonus_count(&self, fighter_id: &str) -> u32 {
        u32::from(self.received_performance_bonus(fighter_id))
            + u32::from(self.bonuses.fight_of_the_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bout() -> Fight {
        Fight::new(
            "fight-1",
            "f1",
            "f2",
            Some(FighterId::from("f1")),
            FightMethod::KoTko,
            2,
        )
    }

    #[test]
    fn missing_records_default_to_zero() {
        let fight = bout();

        assert_eq!(fight.stats_for("f2"), FightStats::EMPTY);
        assert_eq!(fight.penalties_for("f2"), FighterPenalty::default());
    }

    #[test]
    fn winner_and_opponent_lookups() {
        let fight = bout();

        assert!(fight.did_fighter_win("f1"));
        assert!(!fight.did_fighter_win("f2"));
        assert_eq!(fight.opponent_of("f2").map(FighterId::as_str), Some("f1"));
        assert!(fight.opponent_of("f3").is_none());
        assert!(fight.involves("f2"));
    }

    #[test]
    fn finishes_exclude_decisions_and_draws() {
        assert!(FightMethod::KoTko.is_finish());
        assert!(FightMethod::Dq.is_finish());
        assert!(FightMethod::NoContest.is_finish());
        assert!(!FightMethod::Decision.is_finish());
        assert!(!FightMethod::Draw.is_finish());
    }

    #[test]
    fn bonus_count_includes_fight_of_the_night_for_both_sides() {
        let fight = bout().with_fight_of_the_night().with_performance_bonus("f1");

        assert_eq!(fight.ufc_bonus_count("f1"), 2);
        assert_eq!(fight.ufc_bonus_count("f2"), 1);
    }

    #[test]
    fn method_display_names_match_wire_format() {
        assert_eq!(FightMethod::KoTko.to_string(), "KO/TKO");
        assert_eq!(FightMethod::NoContest.to_string(), "No Contest");
        assert_eq!("DQ".parse::<FightMethod>().unwrap(), FightMethod::Dq);
    }
}
