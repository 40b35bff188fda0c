//! Roster legality checks.
//!
//! [`RosterValidator::validate`] checks the rules a roster can be judged on by
//! itself. [`RosterValidator::validate_with_context`] layers on the rules that
//! need event data (salaries and the fight card); see [`context`].
//!
//! Validation never stops at the first problem: every violated rule is
//! reported so a client can show all of them at once.

pub mod context;

pub use context::{EventContext, RosterReport, RosterSummary, suggestions};

use std::collections::BTreeSet;

use crate::config::{DraftConfig, RosterRules};
use crate::domain::{FighterId, Roster};
use crate::error::DraftError;

// ============================================================================
// Violations
// ============================================================================

/// A broken roster rule.
///
/// Messages are user-facing; match on the variant or [`DraftError::error_code`]
/// instead of the text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum RosterViolation {
    /// Too few or too many fighters.
    #[error("Roster must have exactly {expected} fighters")]
    InvalidFighterCount { expected: usize, actual: usize },

    /// Captain id is missing or empty.
    #[error("Roster must have exactly 1 captain")]
    NoCaptain,

    #[error("Captain must be one of the fighters in the roster")]
    CaptainNotInRoster { captain_id: FighterId },

    #[error("Roster can have maximum {max} power-ups")]
    #[cfg_attr(feature = "serde", serde(rename = "TOO_MANY_POWERUPS"))]
    TooManyPowerUps { max: usize, actual: usize },

    /// Reported once, for the first offending power-up.
    #[error("Power-up applied to fighter not in roster")]
    #[cfg_attr(feature = "serde", serde(rename = "POWERUP_INVALID_TARGET"))]
    PowerUpInvalidTarget { fighter_id: FighterId },

    #[error("Roster contains duplicate fighters")]
    DuplicateFighters { fighter_ids: Vec<FighterId> },

    /// More than one power-up assigned to the same fighter.
    #[error("Fighter {fighter_id} has more than one power-up")]
    #[cfg_attr(feature = "serde", serde(rename = "STACKED_POWERUPS"))]
    StackedPowerUps { fighter_id: FighterId },

    #[error("Total salary {total} exceeds the salary cap of {cap}")]
    SalaryCapExceeded { total: u32, cap: u32 },

    /// Both participants of one bout are on the roster.
    #[error("Cannot select both {first} and {second} from the same bout")]
    BoutConflict {
        fight_id: String,
        first: FighterId,
        second: FighterId,
    },
}

impl DraftError for RosterViolation {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFighterCount { .. } => "INVALID_FIGHTER_COUNT",
            Self::NoCaptain => "NO_CAPTAIN",
            Self::CaptainNotInRoster { .. } => "CAPTAIN_NOT_IN_ROSTER",
            Self::TooManyPowerUps { .. } => "TOO_MANY_POWERUPS",
            Self::PowerUpInvalidTarget { .. } => "POWERUP_INVALID_TARGET",
            Self::DuplicateFighters { .. } => "DUPLICATE_FIGHTERS",
            Self::StackedPowerUps { .. } => "STACKED_POWERUPS",
            Self::SalaryCapExceeded { .. } => "SALARY_CAP_EXCEEDED",
            Self::BoutConflict { .. } => "BOUT_CONFLICT",
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidFighterCount { .. }
            | Self::DuplicateFighters { .. }
            | Self::SalaryCapExceeded { .. }
            | Self::BoutConflict { .. } => Some("fighters"),
            Self::NoCaptain | Self::CaptainNotInRoster { .. } => Some("captainId"),
            Self::TooManyPowerUps { .. }
            | Self::PowerUpInvalidTarget { .. }
            | Self::StackedPowerUps { .. } => Some("powerUps"),
        }
    }
}

/// Outcome of a validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<RosterViolation>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<RosterViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// User-facing messages, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn has(&self, error_code: &str) -> bool {
        self.errors.iter().any(|e| e.error_code() == error_code)
    }

    fn extend(&mut self, more: impl IntoIterator<Item = RosterViolation>) {
        self.errors.extend(more);
        self.is_valid = self.errors.is_empty();
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Checks rosters against [`RosterRules`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RosterValidator {
    rules: RosterRules,
}

impl RosterValidator {
    pub fn new(rules: RosterRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.roster)
    }

    pub fn rules(&self) -> &RosterRules {
        &self.rules
    }

    /// Validate the rules a roster can be judged on alone.
    ///
    /// Checks, in order: fighter count, captain, power-up count, power-up
    /// targets, duplicate fighters, stacked power-ups. Salary cap and bout
    /// conflicts need [`validate_with_context`](Self::validate_with_context).
    pub fn validate(&self, roster: &Roster) -> ValidationResult {
        let mut errors = Vec::new();

        if roster.fighters.len() != self.rules.roster_size {
            errors.push(RosterViolation::InvalidFighterCount {
                expected: self.rules.roster_size,
                actual: roster.fighters.len(),
            });
        }

        match roster.captain_id() {
            None => errors.push(RosterViolation::NoCaptain),
            Some(captain_id) if !roster.contains(captain_id.as_str()) => {
                errors.push(RosterViolation::CaptainNotInRoster {
                    captain_id: captain_id.clone(),
                });
            }
            Some(_) => {}
        }

        if roster.power_ups.len() > self.rules.max_power_ups {
            errors.push(RosterViolation::TooManyPowerUps {
                max: self.rules.max_power_ups,
                actual: roster.power_ups.len(),
            });
        }

        if let Some(stray) = roster
            .power_ups
            .iter()
            .find(|p| !roster.contains(p.applied_to_fighter_id.as_str()))
        {
            errors.push(RosterViolation::PowerUpInvalidTarget {
                fighter_id: stray.applied_to_fighter_id.clone(),
            });
        }

        let duplicates = repeated(roster.fighters.iter().map(|f| &f.id));
        if !duplicates.is_empty() {
            errors.push(RosterViolation::DuplicateFighters {
                fighter_ids: duplicates,
            });
        }

        errors.extend(
            repeated(roster.power_ups.iter().map(|p| &p.applied_to_fighter_id))
                .into_iter()
                .map(|fighter_id| RosterViolation::StackedPowerUps { fighter_id }),
        );

        ValidationResult::from_errors(errors)
    }

    /// [`validate`](Self::validate) plus salary cap and bout conflicts.
    ///
    /// Fighters without a known salary count as zero.
    pub fn validate_with_context(&self, roster: &Roster, context: &EventContext) -> ValidationResult {
        let mut result = self.validate(roster);

        let total = context.total_salary(roster);
        let mut extra = Vec::new();
        if total > self.rules.salary_cap {
            extra.push(RosterViolation::SalaryCapExceeded {
                total,
                cap: self.rules.salary_cap,
            });
        }
        extra.extend(context.bout_conflicts(roster));

        result.extend(extra);
        result
    }

    /// Contextual validation with a summary and fix-up hints.
    pub fn report(&self, roster: &Roster, context: &EventContext) -> RosterReport {
        let result = self.validate_with_context(roster, context);
        let summary = RosterSummary::of(roster, context, &self.rules);
        let suggestions = suggestions(&result, &summary);
        RosterReport {
            can_submit: result.is_valid,
            result,
            summary,
            suggestions,
        }
    }
}

/// Ids that occur more than once, each listed once, in first-repeat order.
fn repeated<'a>(ids: impl Iterator<Item = &'a FighterId>) -> Vec<FighterId> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut out = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            out.push(id.clone());
        }
    }
    out
}
