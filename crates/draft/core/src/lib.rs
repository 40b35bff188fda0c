//! Deterministic scoring and roster rules for MMA fantasy drafts.
//!
//! `draft-core` turns finished fight results and a user's six-fighter roster
//! into per-fighter scores, checks roster legality, prices fighters, and
//! tracks XP progression. Everything is pure: no I/O, no clocks, no
//! randomness, so identical inputs always reproduce identical scores.
//!
//! Rule tables live in [`DraftConfig`]; each component is built from its
//! table, and [`DraftConfig::default`] reproduces the launch rules.
//!
//! # Example
//!
//! ```
//! use draft_core::{Fight, FightMethod, Fighter, FighterClass, FighterId, Roster, ScoringEngine};
//!
//! let fighter = Fighter::new("f1", "Alex", FighterClass::Striker, 31);
//! let roster = Roster::new("r1", vec![fighter.clone()]).with_captain("f2");
//! let fight = Fight::new("b1", "f1", "f9", Some(FighterId::from("f1")), FightMethod::KoTko, 2);
//!
//! let score = ScoringEngine::default().calculate_fighter_score(&fighter, &fight, &roster);
//! assert_eq!(score.value(), 260.0);
//! ```
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod progression;
pub mod salary;
pub mod scoring;
pub mod validation;

pub use config::{
    CaptainRules, ConfigError, DraftConfig, LevelThreshold, MethodMultipliers, PenaltyPoints,
    RosterRules, RoundBonuses, SalaryRange, SalaryTable, ScoringConfig, SynergyRules, UfcBonuses,
    VictoryPoints, VolumePoints, XpTable,
};
pub use domain::{
    ClassCounts, DecisionType, EffectConfig, Fight, FightBonuses, FightMethod, FightStats, Fighter,
    FighterClass, FighterId, FighterPenalty, FlatBonusPerUfcBonusConfig, LossToWinWithBonusConfig,
    MultiplierRoundFinishConfig, MultiplierWinLossConfig, PowerUpCard, PowerUpEffect,
    PowerUpEffectType, RequiredBonus, Roster, RosterPowerUp, Score, UnknownConfig,
};
pub use error::DraftError;
pub use event::{FightCard, LeaderboardEntry, RosterScore, rank_leaderboard, score_rosters};
pub use progression::{EventXpInput, LevelChange, XpAward, XpCalculator};
pub use salary::{SalaryCalculator, SalaryInput, SalaryTier};
pub use scoring::{
    PowerUpApplicator, PowerUpResult, ScoreBreakdown, ScoringEngine, SynergyCalculator,
    SynergyResult, SynergyType,
};
pub use validation::{
    EventContext, RosterReport, RosterSummary, RosterValidator, RosterViolation, ValidationResult,
};
