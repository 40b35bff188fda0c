//! Rule tables for scoring, roster legality, salaries, and XP.
//!
//! [`DraftConfig`] is one immutable bundle of constant tables. `Default`
//! reproduces the launch rules; with the `serde` feature every table carries
//! `#[serde(default)]`, so a TOML file only has to name the values it changes.

use crate::domain::{DecisionType, FightMethod};
use crate::error::DraftError;

// ============================================================================
// DraftConfig
// ============================================================================

/// All rule tables, injected into each component at construction.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DraftConfig {
    pub scoring: ScoringConfig,
    pub roster: RosterRules,
    pub salary: SalaryTable,
    pub xp: XpTable,
}

impl DraftConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks cross-field consistency of every table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.roster.validate()?;
        self.salary.validate()?;
        self.xp.validate()
    }
}

// ============================================================================
// Scoring
// ============================================================================

/// Point values and multipliers used by the scoring pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScoringConfig {
    pub victory: VictoryPoints,
    pub method: MethodMultipliers,
    pub volume: VolumePoints,
    pub round_bonus: RoundBonuses,
    pub ufc_bonus: UfcBonuses,
    pub synergy: SynergyRules,
    pub captain: CaptainRules,
    pub penalties: PenaltyPoints,
}

impl ScoringConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.captain.multiplier > 0.0) {
            return Err(ConfigError::NonPositiveMultiplier {
                name: "scoring.captain.multiplier",
            });
        }
        let synergy = &self.synergy;
        for (name, value) in [
            ("scoring.synergy.striker_multiplier", synergy.striker_multiplier),
            ("scoring.synergy.grappler_multiplier", synergy.grappler_multiplier),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveMultiplier { name });
            }
        }
        if synergy.class_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "scoring.synergy.class_threshold",
            });
        }
        Ok(())
    }
}

/// Points for the bout result.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VictoryPoints {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl Default for VictoryPoints {
    fn default() -> Self {
        Self {
            win: 100.0,
            draw: 50.0,
            loss: 0.0,
        }
    }
}

/// Multiplier applied to a winner's victory points, by finishing method.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MethodMultipliers {
    pub ko_tko: f64,
    pub submission: f64,
    pub decision_unanimous: f64,
    pub decision_split: f64,
    pub decision_majority: f64,
    pub dq: f64,
    pub no_contest: f64,
}

impl MethodMultipliers {
    /// Multiplier for a win by `method`.
    ///
    /// A decision without a recorded type scores as a split decision. Draws
    /// have no winner and use 1.0.
    pub fn for_win(&self, method: FightMethod, decision: Option<DecisionType>) -> f64 {
        match method {
            FightMethod::KoTko => self.ko_tko,
            FightMethod::Submission => self.submission,
            FightMethod::Decision => match decision {
                Some(DecisionType::Unanimous) => self.decision_unanimous,
                Some(DecisionType::Majority) => self.decision_majority,
                Some(DecisionType::Split) | None => self.decision_split,
            },
            FightMethod::Dq => self.dq,
            FightMethod::NoContest => self.no_contest,
            FightMethod::Draw => 1.0,
        }
    }
}

impl Default for MethodMultipliers {
    fn default() -> Self {
        Self {
            ko_tko: 2.0,
            submission: 1.8,
            decision_unanimous: 1.2,
            decision_split: 1.0,
            decision_majority: 1.1,
            dq: 1.0,
            no_contest: 1.0,
        }
    }
}

/// Points per in-fight action. Awarded win or lose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VolumePoints {
    pub knockdown: f64,
    pub takedown: f64,
    pub submission_attempt: f64,
    pub significant_strike: f64,
}

impl Default for VolumePoints {
    fn default() -> Self {
        Self {
            knockdown: 20.0,
            takedown: 10.0,
            submission_attempt: 10.0,
            significant_strike: 0.5,
        }
    }
}

/// Bonus for a win inside the distance, by the round it ended in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RoundBonuses {
    pub round_1: f64,
    pub round_2: f64,
    pub round_3: f64,
    pub round_4: f64,
    pub round_5: f64,
}

impl RoundBonuses {
    /// Bonus for `round`; rounds outside 1-5 earn nothing.
    pub fn for_round(&self, round: u8) -> f64 {
        match round {
            1 => self.round_1,
            2 => self.round_2,
            3 => self.round_3,
            4 => self.round_4,
            5 => self.round_5,
            _ => 0.0,
        }
    }
}

impl Default for RoundBonuses {
    fn default() -> Self {
        // Championship rounds pay more than round 3.
        Self {
            round_1: 100.0,
            round_2: 60.0,
            round_3: 30.0,
            round_4: 50.0,
            round_5: 50.0,
        }
    }
}

/// Points for promotion bonuses.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UfcBonuses {
    pub performance_of_the_night: f64,
    pub fight_of_the_night: f64,
}

impl Default for UfcBonuses {
    fn default() -> Self {
        Self {
            performance_of_the_night: 100.0,
            fight_of_the_night: 100.0,
        }
    }
}

/// Class synergy thresholds and rewards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SynergyRules {
    /// Fighters of one class needed to unlock that class's synergy.
    pub class_threshold: u32,
    /// Age at which a fighter also counts as a veteran.
    pub veteran_age: u32,
    pub striker_multiplier: f64,
    pub grappler_multiplier: f64,
    /// Flat points, not a multiplier.
    pub all_rounder_flat_bonus: f64,
}

impl Default for SynergyRules {
    fn default() -> Self {
        Self {
            class_threshold: 3,
            veteran_age: 35,
            striker_multiplier: 1.15,
            grappler_multiplier: 1.15,
            all_rounder_flat_bonus: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CaptainRules {
    pub multiplier: f64,
}

impl Default for CaptainRules {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

/// Points subtracted at the end of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PenaltyPoints {
    pub weight_miss: f64,
    pub point_deduction: f64,
}

impl Default for PenaltyPoints {
    fn default() -> Self {
        Self {
            weight_miss: 50.0,
            point_deduction: 25.0,
        }
    }
}

// ============================================================================
// Roster Rules
// ============================================================================

/// Lineup constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RosterRules {
    pub roster_size: usize,
    pub max_power_ups: usize,
    pub salary_cap: u32,
}

impl RosterRules {
    pub const DEFAULT_ROSTER_SIZE: usize = 6;
    pub const DEFAULT_MAX_POWER_UPS: usize = 2;
    pub const DEFAULT_SALARY_CAP: u32 = 10_000;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.roster_size == 0 {
            return Err(ConfigError::ZeroRosterSize);
        }
        Ok(())
    }
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            roster_size: Self::DEFAULT_ROSTER_SIZE,
            max_power_ups: Self::DEFAULT_MAX_POWER_UPS,
            salary_cap: Self::DEFAULT_SALARY_CAP,
        }
    }
}

// ============================================================================
// Salary
// ============================================================================

/// Inclusive salary band for one ranking tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// `floor((min + max) / 2)`, without overflow and for either bound order.
    pub const fn midpoint(&self) -> u32 {
        self.min / 2 + self.max / 2 + (self.min % 2 + self.max % 2) / 2
    }
}

/// Salary tiers by ranking plus situational modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SalaryTable {
    pub champion: SalaryRange,
    pub top_5: SalaryRange,
    pub top_10: SalaryRange,
    pub top_15: SalaryRange,
    pub unranked: SalaryRange,
    /// Hard ceiling applied after modifiers.
    pub max_salary: u32,
    pub opponent_champion_bonus: u32,
    pub title_fight_bonus: u32,
    pub long_streak: u32,
    pub long_streak_bonus: u32,
    pub short_streak: u32,
    pub short_streak_bonus: u32,
}

impl SalaryTable {
    fn validate(&self) -> Result<(), ConfigError> {
        for (tier, range) in [
            ("champion", self.champion),
            ("top_5", self.top_5),
            ("top_10", self.top_10),
            ("top_15", self.top_15),
            ("unranked", self.unranked),
        ] {
            if range.min > range.max {
                return Err(ConfigError::EmptySalaryRange {
                    tier,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.short_streak > self.long_streak {
            return Err(ConfigError::StreakThresholdsReversed {
                short: self.short_streak,
                long: self.long_streak,
            });
        }
        Ok(())
    }
}

impl Default for SalaryTable {
    fn default() -> Self {
        Self {
            champion: SalaryRange::new(2300, 2500),
            top_5: SalaryRange::new(2000, 2299),
            top_10: SalaryRange::new(1700, 1999),
            top_15: SalaryRange::new(1400, 1699),
            unranked: SalaryRange::new(1000, 1399),
            max_salary: 2500,
            opponent_champion_bonus: 200,
            title_fight_bonus: 300,
            long_streak: 5,
            long_streak_bonus: 200,
            short_streak: 3,
            short_streak_bonus: 100,
        }
    }
}

// ============================================================================
// XP
// ============================================================================

/// Minimum total XP for a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelThreshold {
    pub level: u32,
    pub xp: u32,
}

impl LevelThreshold {
    pub const fn new(level: u32, xp: u32) -> Self {
        Self { level, xp }
    }
}

/// XP awards per event and the level ladder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct XpTable {
    /// Awarded for entering a roster, win or lose.
    pub participation: u32,
    pub captain_win: u32,
    pub ko_tko_bonus: u32,
    pub submission_bonus: u32,
    pub decision_bonus: u32,
    /// Sorted by level, starting at level 1 with 0 XP.
    pub levels: Vec<LevelThreshold>,
}

impl XpTable {
    /// Extra XP for the captain's winning method.
    pub fn method_bonus(&self, method: FightMethod) -> u32 {
        match method {
            FightMethod::KoTko => self.ko_tko_bonus,
            FightMethod::Submission => self.submission_bonus,
            FightMethod::Decision => self.decision_bonus,
            FightMethod::Dq | FightMethod::NoContest | FightMethod::Draw => 0,
        }
    }

    pub fn max_level(&self) -> u32 {
        self.levels.last().map_or(1, |t| t.level)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.levels.first() {
            Some(first) if first.level == 1 && first.xp == 0 => {}
            _ => return Err(ConfigError::LevelTableStart),
        }
        for pair in self.levels.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.level != prev.level + 1 || next.xp <= prev.xp {
                return Err(ConfigError::LevelTableNotAscending {
                    level: next.level,
                    xp: next.xp,
                });
            }
        }
        Ok(())
    }
}

impl Default for XpTable {
    fn default() -> Self {
        Self {
            participation: 50,
            captain_win: 100,
            ko_tko_bonus: 50,
            submission_bonus: 40,
            decision_bonus: 20,
            levels: vec![
                LevelThreshold::new(1, 0),
                LevelThreshold::new(2, 100),
                LevelThreshold::new(3, 300),
                LevelThreshold::new(4, 600),
                LevelThreshold::new(5, 1000),
                LevelThreshold::new(6, 1500),
                LevelThreshold::new(7, 2100),
                LevelThreshold::new(8, 2800),
                LevelThreshold::new(9, 3600),
                LevelThreshold::new(10, 4500),
            ],
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Inconsistent configuration tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    NonPositiveMultiplier { name: &'static str },

    #[error("{name} must be at least 1")]
    ZeroThreshold { name: &'static str },

    #[error("roster size must be at least 1")]
    ZeroRosterSize,

    #[error("salary range for {tier} is empty ({min} > {max})")]
    EmptySalaryRange {
        tier: &'static str,
        min: u32,
        max: u32,
    },

    #[error("short streak threshold {short} exceeds long streak threshold {long}")]
    StreakThresholdsReversed { short: u32, long: u32 },

    #[error("level table must start at level 1 with 0 XP")]
    LevelTableStart,

    #[error("level table must ascend one level at a time with rising XP (level {level} at {xp} XP)")]
    LevelTableNotAscending { level: u32, xp: u32 },
}

impl DraftError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveMultiplier { .. } => "CONFIG_NON_POSITIVE_MULTIPLIER",
            Self::ZeroThreshold { .. } => "CONFIG_ZERO_THRESHOLD",
            Self::ZeroRosterSize => "CONFIG_ZERO_ROSTER_SIZE",
            Self::EmptySalaryRange { .. } => "CONFIG_EMPTY_SALARY_RANGE",
            Self::StreakThresholdsReversed { .. } => "CONFIG_STREAK_THRESHOLDS_REVERSED",
            Self::LevelTableStart => "CONFIG_LEVEL_TABLE_START",
            Self::LevelTableNotAscending { .. } => "CONFIG_LEVEL_TABLE_NOT_ASCENDING",
        }
    }
}
