//! Power-up effect dispatch.
//!
//! Loss-to-win cards act early, on victory points and method multiplier, so
//! the engine asks [`PowerUpApplicator::should_loss_to_win_activate`] before
//! building the base score. Every other effect is applied after the captain
//! multiplier via [`PowerUpApplicator::apply_effect`].

use tracing::{trace, warn};

use crate::domain::{Fight, PowerUpCard, PowerUpEffect, RequiredBonus};

/// Power-up contribution, applied as `score * multiplier + flat_bonus`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PowerUpResult {
    pub multiplier: f64,
    pub flat_bonus: f64,
}

impl PowerUpResult {
    pub const NEUTRAL: Self = Self {
        multiplier: 1.0,
        flat_bonus: 0.0,
    };

    pub const fn scaled(multiplier: f64) -> Self {
        Self {
            multiplier,
            flat_bonus: 0.0,
        }
    }

    pub const fn flat(flat_bonus: f64) -> Self {
        Self {
            multiplier: 1.0,
            flat_bonus,
        }
    }

    #[inline]
    pub fn apply(&self, score: f64) -> f64 {
        score * self.multiplier + self.flat_bonus
    }
}

impl Default for PowerUpResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Applies power-up effects. Stateless; behaviour comes from the effect config.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerUpApplicator;

impl PowerUpApplicator {
    pub fn new() -> Self {
        Self
    }

    /// True when a loss-to-win effect converts this fighter's result.
    ///
    /// Requires a non-winner (loss, draw, or no contest) whose fight carries
    /// the configured bonus. `Any` accepts Fight of the Night or this
    /// fighter's Performance of the Night.
    pub fn should_loss_to_win_activate(
        &self,
        effect: Option<&PowerUpEffect>,
        fight: &Fight,
        fighter_id: &str,
    ) -> bool {
        let Some(PowerUpEffect::LossToWinWithBonus(config)) = effect else {
            return false;
        };
        if fight.did_fighter_win(fighter_id) {
            return false;
        }
        let fotn = fight.bonuses.fight_of_the_night;
        let potn = fight.received_performance_bonus(fighter_id);
        match config.required_bonus {
            RequiredBonus::Fotn => fotn,
            RequiredBonus::Potn => potn,
            RequiredBonus::Any => fotn || potn,
        }
    }

    /// Method multiplier a loss-to-win effect substitutes, if it is one.
    pub fn loss_to_win_method_multiplier(&self, effect: Option<&PowerUpEffect>) -> Option<f64> {
        match effect {
            Some(PowerUpEffect::LossToWinWithBonus(config)) => Some(config.treat_as_method_multiplier),
            _ => None,
        }
    }

    /// Resolves `card` and applies its effect.
    ///
    /// An absent card is neutral. A card whose config does not match its
    /// effect type is logged and treated as neutral.
    pub fn apply_power_up(
        &self,
        card: Option<&PowerUpCard>,
        fight: &Fight,
        fighter_id: &str,
        current_score: f64,
    ) -> PowerUpResult {
        let Some(card) = card else {
            return PowerUpResult::NEUTRAL;
        };
        match card.effect() {
            Some(effect) => self.apply_effect(Some(&effect), fight, fighter_id, current_score),
            None => {
                warn!(
                    card = %card.id,
                    effect_type = %card.effect_type,
                    "power-up config does not match its effect type; ignoring"
                );
                PowerUpResult::NEUTRAL
            }
        }
    }

    /// Applies an already-resolved effect.
    ///
    /// | Effect | Condition | Result |
    /// |---|---|---|
    /// | win/loss multiplier | always | win or loss multiplier |
    /// | loss to win | handled before the base score | neutral |
    /// | round finish | won in target round, finish if required | multiplier |
    /// | flat per bonus | always | bonus count x points |
    pub fn apply_effect(
        &self,
        effect: Option<&PowerUpEffect>,
        fight: &Fight,
        fighter_id: &str,
        current_score: f64,
    ) -> PowerUpResult {
        let Some(effect) = effect else {
            return PowerUpResult::NEUTRAL;
        };
        let won = fight.did_fighter_win(fighter_id);

        let result = match effect {
            PowerUpEffect::MultiplierWinLoss(config) => {
                if won {
                    PowerUpResult::scaled(config.win_multiplier)
                } else {
                    PowerUpResult::scaled(config.loss_multiplier)
                }
            }
            PowerUpEffect::LossToWinWithBonus(_) => PowerUpResult::NEUTRAL,
            PowerUpEffect::MultiplierRoundFinish(config) => {
                let qualifies = won
                    && fight.round == config.target_round
                    && (!config.must_be_finish || fight.was_finished());
                if qualifies {
                    PowerUpResult::scaled(config.multiplier)
                } else {
                    PowerUpResult::NEUTRAL
                }
            }
            PowerUpEffect::FlatBonusPerUfcBonus(config) => {
                let count = fight.ufc_bonus_count(fighter_id);
                PowerUpResult::flat(f64::from(count) * config.bonus_per_ufc_bonus)
            }
        };

        trace!(
            fighter = fighter_id,
            effect = %effect.effect_type(),
            current_score,
            multiplier = result.multiplier,
            flat_bonus = result.flat_bonus,
            "power-up evaluated"
        );
        result
    }
}
