//! Fighter scoring.
//!
//! # Formula
//!
//! ```text
//! base  = V * M + Vol + R + B
//! score = ((base * Syn + SynFlat) * Cap) * PU + PUFlat - P
//! ```
//!
//! | Term | Meaning |
//! |---|---|
//! | V | victory points (win / draw / loss) |
//! | M | method multiplier, winners only |
//! | Vol | volume points, awarded win or lose |
//! | R | round bonus for a win inside the distance |
//! | B | promotion bonuses (POTN, FOTN) |
//! | Syn | roster class synergy |
//! | Cap | captain multiplier |
//! | PU | power-up |
//! | P | penalties |
//!
//! The order is significant: a negative power-up multiplier applied after the
//! captain multiplier is not the same as one applied before it. Intermediate
//! values keep full `f64` precision; only the final value is rounded.

pub mod power_up;
pub mod synergy;

pub use power_up::{PowerUpApplicator, PowerUpResult};
pub use synergy::{SynergyCalculator, SynergyResult, SynergyType};

use tracing::{debug, warn};

use crate::config::{DraftConfig, ScoringConfig};
use crate::domain::{Fight, FightMethod, Fighter, PowerUpEffect, PowerUpEffectType, Roster, Score};

// ============================================================================
// Score Breakdown
// ============================================================================

/// Every intermediate value of one fighter's score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreBreakdown {
    pub fighter_id: String,
    pub fighter_name: String,
    pub fight_id: String,
    pub won: bool,
    pub is_captain: bool,
    /// A loss-to-win power-up converted this fighter's result.
    pub loss_converted: bool,
    pub victory_points: f64,
    pub method_multiplier: f64,
    pub volume_points: f64,
    pub round_bonus: f64,
    pub ufc_bonus: f64,
    pub base_score: f64,
    pub synergy: SynergyResult,
    pub score_with_synergy: f64,
    pub captain_multiplier: f64,
    pub score_with_captain: f64,
    pub power_up: Option<PowerUpEffectType>,
    pub power_up_result: PowerUpResult,
    pub score_with_power_up: f64,
    pub penalties: f64,
    pub final_score: Score,
}

// ============================================================================
// Scoring Engine
// ============================================================================

/// Computes fighter scores from fight results and roster context.
#[derive(Clone, Debug, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
    synergy: SynergyCalculator,
    power_ups: PowerUpApplicator,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            synergy: SynergyCalculator::new(config.synergy),
            power_ups: PowerUpApplicator::new(),
            config,
        }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.scoring.clone())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn synergy_calculator(&self) -> &SynergyCalculator {
        &self.synergy
    }

    pub fn power_up_applicator(&self) -> &PowerUpApplicator {
        &self.power_ups
    }

    /// Final score of `fighter` in `fight` on `roster`.
    ///
    /// Never fails: missing stats, penalties, or power-up configs contribute
    /// nothing.
    pub fn calculate_fighter_score(&self, fighter: &Fighter, fight: &Fight, roster: &Roster) -> Score {
        self.score_breakdown(fighter, fight, roster).final_score
    }

    /// Runs the scoring pipeline and records each step.
    pub fn score_breakdown(&self, fighter: &Fighter, fight: &Fight, roster: &Roster) -> ScoreBreakdown {
        let id = fighter.id.as_str();
        let won = fight.did_fighter_win(id);
        let effect = self.power_up_effect(roster, id);

        let loss_converted = self
            .power_ups
            .should_loss_to_win_activate(effect.as_ref(), fight, id);

        let victory_points = self.victory_points(fight, won, loss_converted);
        let method_multiplier = if loss_converted {
            self.power_ups
                .loss_to_win_method_multiplier(effect.as_ref())
                .unwrap_or(1.0)
        } else {
            self.method_multiplier(fight, won)
        };
        let volume_points = self.volume_points(fight, id);
        let round_bonus = self.round_bonus(fight, won);
        let ufc_bonus = self.ufc_bonus(fight, id);
        let base_score = victory_points * method_multiplier + volume_points + round_bonus + ufc_bonus;

        let synergy = self.synergy.calculate_synergy(roster, fight, id);
        let score_with_synergy = synergy.apply(base_score);

        let is_captain = roster.is_captain(id);
        let captain_multiplier = if is_captain {
            self.config.captain.multiplier
        } else {
            1.0
        };
        let score_with_captain = score_with_synergy * captain_multiplier;

        let power_up_result = self
            .power_ups
            .apply_effect(effect.as_ref(), fight, id, score_with_captain);
        let score_with_power_up = power_up_result.apply(score_with_captain);

        let penalties = self.penalties(fight, id);
        let final_score = Score::new(score_with_power_up - penalties);

        debug!(
            roster = %roster.id,
            fighter = id,
            fight = %fight.id,
            base = base_score,
            synergy = synergy.multiplier,
            captain = captain_multiplier,
            power_up = power_up_result.multiplier,
            penalties,
            score = %final_score,
            "fighter scored"
        );

        ScoreBreakdown {
            fighter_id: fighter.id.to_string(),
            fighter_name: fighter.name.clone(),
            fight_id: fight.id.clone(),
            won,
            is_captain,
            loss_converted,
            victory_points,
            method_multiplier,
            volume_points,
            round_bonus,
            ufc_bonus,
            base_score,
            synergy,
            score_with_synergy,
            captain_multiplier,
            score_with_captain,
            power_up: effect.as_ref().map(PowerUpEffect::effect_type),
            power_up_result,
            score_with_power_up,
            penalties,
            final_score,
        }
    }

    /// Resolved effect of the first power-up assigned to the fighter.
    fn power_up_effect(&self, roster: &Roster, fighter_id: &str) -> Option<PowerUpEffect> {
        let assigned = roster.power_up_for(fighter_id)?;
        if assigned.effect.is_none() {
            warn!(
                roster = %roster.id,
                card = %assigned.power_up_card_id,
                effect_type = %assigned.effect_type,
                "power-up has no usable config; scoring without it"
            );
        }
        assigned.effect
    }

    fn victory_points(&self, fight: &Fight, won: bool, loss_converted: bool) -> f64 {
        let victory = &self.config.victory;
        if loss_converted || won {
            victory.win
        } else if fight.is_draw() {
            victory.draw
        } else {
            victory.loss
        }
    }

    fn method_multiplier(&self, fight: &Fight, won: bool) -> f64 {
        if !won {
            return 1.0;
        }
        self.config.method.for_win(fight.method, fight.decision_type)
    }

    fn volume_points(&self, fight: &Fight, fighter_id: &str) -> f64 {
        let stats = fight.stats_for(fighter_id);
        let points = &self.config.volume;
        f64::from(stats.knockdowns) * points.knockdown
            + f64::from(stats.takedowns) * points.takedown
            + f64::from(stats.submission_attempts) * points.submission_attempt
            + f64::from(stats.significant_strikes) * points.significant_strike
    }

    fn round_bonus(&self, fight: &Fight, won: bool) -> f64 {
        if !won || fight.method == FightMethod::Decision {
            return 0.0;
        }
        self.config.round_bonus.for_round(fight.round)
    }

    fn ufc_bonus(&self, fight: &Fight, fighter_id: &str) -> f64 {
        let bonuses = &self.config.ufc_bonus;
        let mut total = 0.0;
        if fight.received_performance_bonus(fighter_id) {
            total += bonuses.performance_of_the_night;
        }
        if fight.bonuses.fight_of_the_night {
            total += bonuses.fight_of_the_night;
        }
        total
    }

    fn penalties(&self, fight: &Fight, fighter_id: &str) -> f64 {
        let recorded = fight.penalties_for(fighter_id);
        let points = &self.config.penalties;
        let mut total = f64::from(recorded.point_deductions) * points.point_deduction.abs();
        if recorded.weight_miss {
            total += points.weight_miss.abs();
        }
        total
    }
}
