//! Event data needed for the salary-cap and same-bout rules.

use std::collections::BTreeMap;

use crate::config::RosterRules;
use crate::domain::{Fight, FighterId, Roster};

use super::{RosterViolation, ValidationResult};

// ============================================================================
// Event Context
// ============================================================================

/// Salaries and bout pairings for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventContext {
    salaries: BTreeMap<FighterId, u32>,
    bouts: Vec<Bout>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Bout {
    fight_id: String,
    fighter1_id: FighterId,
    fighter2_id: FighterId,
}

impl EventContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose bouts are taken from `fights`.
    pub fn from_fights<'a>(fights: impl IntoIterator<Item = &'a Fight>) -> Self {
        let mut context = Self::new();
        for fight in fights {
            context.add_bout(fight.id.clone(), fight.fighter1_id.clone(), fight.fighter2_id.clone());
        }
        context
    }

    #[must_use]
    pub fn with_salary(mut self, fighter_id: impl Into<FighterId>, salary: u32) -> Self {
        self.salaries.insert(fighter_id.into(), salary);
        self
    }

    #[must_use]
    pub fn with_bout(
        mut self,
        fight_id: impl Into<String>,
        fighter1_id: impl Into<FighterId>,
        fighter2_id: impl Into<FighterId>,
    ) -> Self {
        self.add_bout(fight_id.into(), fighter1_id.into(), fighter2_id.into());
        self
    }

    fn add_bout(&mut self, fight_id: String, fighter1_id: FighterId, fighter2_id: FighterId) {
        self.bouts.push(Bout {
            fight_id,
            fighter1_id,
            fighter2_id,
        });
    }

    pub fn salary_of(&self, fighter_id: &str) -> Option<u32> {
        self.salaries.get(fighter_id).copied()
    }

    /// Sum of roster salaries; unknown salaries count as zero.
    pub fn total_salary(&self, roster: &Roster) -> u32 {
        roster
            .fighters
            .iter()
            .map(|f| self.salary_of(f.id.as_str()).unwrap_or(0))
            .fold(0u32, u32::saturating_add)
    }

    /// One violation per bout with both participants on the roster.
    pub fn bout_conflicts(&self, roster: &Roster) -> Vec<RosterViolation> {
        self.bouts
            .iter()
            .filter(|b| roster.contains(b.fighter1_id.as_str()) && roster.contains(b.fighter2_id.as_str()))
            .map(|b| RosterViolation::BoutConflict {
                fight_id: b.fight_id.clone(),
                first: b.fighter1_id.clone(),
                second: b.fighter2_id.clone(),
            })
            .collect()
    }
}

// ============================================================================
// Summary & Suggestions
// ============================================================================

/// Roster totals shown next to validation results.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RosterSummary {
    pub fighter_count: usize,
    pub max_fighters: usize,
    pub total_salary: u32,
    pub salary_cap: u32,
    /// Negative when over the cap.
    pub remaining_budget: i64,
    pub has_captain: bool,
    pub power_up_count: usize,
    pub max_power_ups: usize,
}

impl RosterSummary {
    pub fn of(roster: &Roster, context: &EventContext, rules: &RosterRules) -> Self {
        let total_salary = context.total_salary(roster);
        Self {
            fighter_count: roster.fighters.len(),
            max_fighters: rules.roster_size,
            total_salary,
            salary_cap: rules.salary_cap,
            remaining_budget: i64::from(rules.salary_cap) - i64::from(total_salary),
            has_captain: roster.captain().is_some(),
            power_up_count: roster.power_ups.len(),
            max_power_ups: rules.max_power_ups,
        }
    }
}

/// Validation result, summary, and hints for a roster being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RosterReport {
    pub can_submit: bool,
    pub result: ValidationResult,
    pub summary: RosterSummary,
    pub suggestions: Vec<String>,
}

/// Hints for fixing the violations in `result`, at most one per rule.
pub fn suggestions(result: &ValidationResult, summary: &RosterSummary) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |hint: String| {
        if !out.contains(&hint) {
            out.push(hint);
        }
    };

    for violation in &result.errors {
        match violation {
            RosterViolation::InvalidFighterCount { expected, actual } => {
                if actual < expected {
                    push(format!(
                        "Add {} more fighter(s) to complete your roster",
                        expected - actual
                    ));
                } else {
                    push(format!("Remove {} fighter(s) from your roster", actual - expected));
                }
            }
            RosterViolation::SalaryCapExceeded { .. } => {
                push("Consider replacing high-salary fighters with lower-ranked alternatives".into());
            }
            RosterViolation::NoCaptain | RosterViolation::CaptainNotInRoster { .. } => {
                push("Select one of your fighters as captain for bonus points".into());
            }
            RosterViolation::TooManyPowerUps { .. } => {
                push(format!(
                    "Remove a power-up to meet the maximum of {} allowed",
                    summary.max_power_ups
                ));
            }
            RosterViolation::PowerUpInvalidTarget { .. } => {
                push("Apply power-ups only to fighters on your roster".into());
            }
            RosterViolation::DuplicateFighters { .. } => {
                push("Remove duplicate fighters from your roster".into());
            }
            RosterViolation::StackedPowerUps { .. } => {
                push("Spread your power-ups across different fighters".into());
            }
            RosterViolation::BoutConflict { .. } => {
                push("Pick only one fighter from each bout".into());
            }
        }
    }
    out
}
