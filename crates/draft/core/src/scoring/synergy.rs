//! Roster composition synergies.

use tracing::debug;

use crate::config::SynergyRules;
use crate::domain::{DecisionType, Fight, FightMethod, FighterClass, Roster};

// ============================================================================
// Synergy Result
// ============================================================================

/// Which class synergy fired.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SynergyType {
    Striker,
    Grappler,
    #[strum(serialize = "All-Rounder")]
    #[cfg_attr(feature = "serde", serde(rename = "All-Rounder"))]
    AllRounder,
}

/// Synergy contribution, applied as `base * multiplier + flat_bonus`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SynergyResult {
    pub multiplier: f64,
    pub flat_bonus: f64,
    pub synergy_type: Option<SynergyType>,
}

impl SynergyResult {
    pub const NONE: Self = Self {
        multiplier: 1.0,
        flat_bonus: 0.0,
        synergy_type: None,
    };

    /// Applies the synergy to a base score.
    #[inline]
    pub fn apply(&self, base: f64) -> f64 {
        base * self.multiplier + self.flat_bonus
    }
}

impl Default for SynergyResult {
    fn default() -> Self {
        Self::NONE
    }
}

// ============================================================================
// Synergy Calculator
// ============================================================================

/// Evaluates class synergies for one fighter of a roster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SynergyCalculator {
    rules: SynergyRules,
}

impl SynergyCalculator {
    pub fn new(rules: SynergyRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SynergyRules {
        &self.rules
    }

    /// Calculate the synergy bonus for `fighter_id`.
    ///
    /// Classes are tested in priority order and the first match wins:
    ///
    /// | Class | Condition | Effect |
    /// |---|---|---|
    /// | Striker | threshold Strikers, won by KO/TKO | multiplier |
    /// | Grappler | threshold Grapplers, won by Submission | multiplier |
    /// | All-Rounder | threshold All-Rounders, won by Decision | flat bonus |
    ///
    /// A veteran-heavy roster whose fighter lost a split decision is detected
    /// but currently has no effect.
    ///
    /// # Returns
    ///
    /// [`SynergyResult::NONE`] when nothing applies.
    pub fn calculate_synergy(&self, roster: &Roster, fight: &Fight, fighter_id: &str) -> SynergyResult {
        let counts = roster.class_counts(self.rules.veteran_age);
        let threshold = self.rules.class_threshold;
        let won = fight.did_fighter_win(fighter_id);

        let result = if won
            && fight.method == FightMethod::KoTko
            && counts.get(FighterClass::Striker) >= threshold
        {
            SynergyResult {
                multiplier: self.rules.striker_multiplier,
                flat_bonus: 0.0,
                synergy_type: Some(SynergyType::Striker),
            }
        } else if won
            && fight.method == FightMethod::Submission
            && counts.get(FighterClass::Grappler) >= threshold
        {
            SynergyResult {
                multiplier: self.rules.grappler_multiplier,
                flat_bonus: 0.0,
                synergy_type: Some(SynergyType::Grappler),
            }
        } else if won
            && fight.method == FightMethod::Decision
            && counts.get(FighterClass::AllRounder) >= threshold
        {
            SynergyResult {
                multiplier: 1.0,
                flat_bonus: self.rules.all_rounder_flat_bonus,
                synergy_type: Some(SynergyType::AllRounder),
            }
        } else {
            if !won
                && fight.method == FightMethod::Decision
                && fight.decision_type == Some(DecisionType::Split)
                && counts.get(FighterClass::Veteran) >= threshold
            {
                debug!(
                    roster = %roster.id,
                    fighter = fighter_id,
                    veterans = counts.get(FighterClass::Veteran),
                    "veteran synergy condition met; no effect is defined"
                );
            }
            SynergyResult::NONE
        };

        if let Some(kind) = result.synergy_type {
            debug!(roster = %roster.id, fighter = fighter_id, synergy = %kind, "synergy applied");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fighter, FighterId};

    fn roster_with(classes: &[FighterClass]) -> Roster {
        let fighters = classes
            .iter()
            .enumerate()
            .map(|(i, class)| Fighter::new(format!("f{}", i + 1), format!("Fighter {}", i + 1), *class, 28))
            .collect();
        Roster::new("r1", fighters)
    }

    fn win(method: FightMethod) -> Fight {
        Fight::new("fight-1", "f1", "opp", Some(FighterId::from("f1")), method, 1)
    }

    #[test]
    fn two_strikers_do_not_trigger() {
        let roster = roster_with(&[
            FighterClass::Striker,
            FighterClass::Striker,
            FighterClass::Grappler,
            FighterClass::Grappler,
            FighterClass::AllRounder,
            FighterClass::AllRounder,
        ]);

        let result = SynergyCalculator::default().calculate_synergy(&roster, &win(FightMethod::KoTko), "f1");
        assert_eq!(result, SynergyResult::NONE);
    }

    #[test]
    fn three_strikers_trigger_only_on_knockout() {
        let roster = roster_with(&[
            FighterClass::Striker,
            FighterClass::Striker,
            FighterClass::Striker,
            FighterClass::Grappler,
            FighterClass::AllRounder,
            FighterClass::AllRounder,
        ]);
        let calc = SynergyCalculator::default();

        let ko = calc.calculate_synergy(&roster, &win(FightMethod::KoTko), "f1");
        assert_eq!(ko.synergy_type, Some(SynergyType::Striker));
        assert_eq!(ko.multiplier, 1.15);

        let sub = calc.calculate_synergy(&roster, &win(FightMethod::Submission), "f1");
        assert_eq!(sub, SynergyResult::NONE);
    }

    #[test]
    fn all_rounder_synergy_is_flat() {
        let roster = roster_with(&[
            FighterClass::AllRounder,
            FighterClass::AllRounder,
            FighterClass::AllRounder,
            FighterClass::Striker,
            FighterClass::Grappler,
            FighterClass::Grappler,
        ]);

        let result =
            SynergyCalculator::default().calculate_synergy(&roster, &win(FightMethod::Decision), "f1");
        assert_eq!(result.multiplier, 1.0);
        assert_eq!(result.flat_bonus, 10.0);
        assert_eq!(result.apply(100.0), 110.0);
    }

    #[test]
    fn losers_never_get_synergy() {
        let roster = roster_with(&[FighterClass::Striker; 6]);
        let fight = Fight::new("fight-1", "f1", "opp", Some(FighterId::from("opp")), FightMethod::KoTko, 1);

        let result = SynergyCalculator::default().calculate_synergy(&roster, &fight, "f1");
        assert_eq!(result, SynergyResult::NONE);
    }

    #[test]
    fn veteran_split_decision_loss_is_neutral() {
        let fighters = (1..=6)
            .map(|i| Fighter::new(format!("f{i}"), "Old Timer", FighterClass::Veteran, 38))
            .collect();
        let roster = Roster::new("r1", fighters);
        let fight = Fight::new("fight-1", "f1", "opp", Some(FighterId::from("opp")), FightMethod::Decision, 3)
            .with_decision(DecisionType::Split);

        let result = SynergyCalculator::default().calculate_synergy(&roster, &fight, "f1");
        assert_eq!(result, SynergyResult::NONE);
    }
}
