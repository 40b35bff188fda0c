//! Records the engine reads: fighters, fights, rosters, power-up cards, scores.
//!
//! Everything here is plain data with lookup helpers. No scoring rules live in
//! this module.

mod fight;
mod fighter;
mod power_up;
mod roster;
mod score;

pub use fight::{DecisionType, Fight, FightBonuses, FightMethod, FightStats, FighterPenalty};
pub use fighter::{Fighter, FighterClass, FighterId};
pub use power_up::{
    EffectConfig, FlatBonusPerUfcBonusConfig, LossToWinWithBonusConfig, MultiplierRoundFinishConfig,
    MultiplierWinLossConfig, PowerUpCard, PowerUpEffect, PowerUpEffectType, RequiredBonus,
    RosterPowerUp, UnknownConfig,
};
pub use roster::{ClassCounts, Roster};
pub use score::Score;
