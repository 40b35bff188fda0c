//! Fighter salaries from ranking and matchup.
//!
//! # Formula
//!
//! ```text
//! salary = min(tier_midpoint + opponent_champion + title_fight + streak, max_salary)
//! ```
//!
//! The streak bonus is not cumulative: a long streak earns the long-streak
//! bonus only.

use crate::config::{DraftConfig, SalaryRange, SalaryTable};

/// Ranking band a fighter's base salary is drawn from.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SalaryTier {
    Champion,
    #[strum(serialize = "Top 5")]
    #[cfg_attr(feature = "serde", serde(rename = "Top 5"))]
    Top5,
    #[strum(serialize = "Top 10")]
    #[cfg_attr(feature = "serde", serde(rename = "Top 10"))]
    Top10,
    #[strum(serialize = "Top 15")]
    #[cfg_attr(feature = "serde", serde(rename = "Top 15"))]
    Top15,
    Unranked,
}

impl SalaryTier {
    /// Tier for a divisional rank (0 = champion, `None` = unranked).
    pub const fn from_rank(rank: Option<u32>, is_champion: bool) -> Self {
        if is_champion {
            return Self::Champion;
        }
        match rank {
            Some(0) => Self::Champion,
            Some(1..=5) => Self::Top5,
            Some(6..=10) => Self::Top10,
            Some(11..=15) => Self::Top15,
            _ => Self::Unranked,
        }
    }
}

/// Salary inputs for one fighter on one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct SalaryInput {
    /// 0 is the champion; `None` is unranked.
    pub rank: Option<u32>,
    pub is_champion: bool,
    pub opponent_is_champion: bool,
    pub is_title_fight: bool,
    pub win_streak: u32,
}

impl SalaryInput {
    pub const fn ranked(rank: u32) -> Self {
        Self {
            rank: Some(rank),
            is_champion: false,
            opponent_is_champion: false,
            is_title_fight: false,
            win_streak: 0,
        }
    }

    pub const fn unranked() -> Self {
        Self {
            rank: None,
            is_champion: false,
            opponent_is_champion: false,
            is_title_fight: false,
            win_streak: 0,
        }
    }
}

/// Deterministic salary lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SalaryCalculator {
    table: SalaryTable,
}

impl SalaryCalculator {
    pub fn new(table: SalaryTable) -> Self {
        Self { table }
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.salary)
    }

    pub fn range_for(&self, tier: SalaryTier) -> SalaryRange {
        match tier {
            SalaryTier::Champion => self.table.champion,
            SalaryTier::Top5 => self.table.top_5,
            SalaryTier::Top10 => self.table.top_10,
            SalaryTier::Top15 => self.table.top_15,
            SalaryTier::Unranked => self.table.unranked,
        }
    }

    pub fn base_salary(&self, input: &SalaryInput) -> u32 {
        self.range_for(SalaryTier::from_rank(input.rank, input.is_champion))
            .midpoint()
    }

    /// Salary for `input`, capped at the table's maximum.
    pub fn calculate_salary(&self, input: &SalaryInput) -> u32 {
        let table = &self.table;
        let mut salary = self.base_salary(input);

        if input.opponent_is_champion {
            salary = salary.saturating_add(table.opponent_champion_bonus);
        }
        if input.is_title_fight {
            salary = salary.saturating_add(table.title_fight_bonus);
        }
        if input.win_streak >= table.long_streak {
            salary = salary.saturating_add(table.long_streak_bonus);
        } else if input.win_streak >= table.short_streak {
            salary = salary.saturating_add(table.short_streak_bonus);
        }

        salary.min(table.max_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_salaries_by_tier() {
        let calc = SalaryCalculator::default();

        assert_eq!(calc.calculate_salary(&SalaryInput::ranked(0)), 2400);
        assert_eq!(calc.calculate_salary(&SalaryInput::ranked(3)), 2149);
        assert_eq!(calc.calculate_salary(&SalaryInput::ranked(7)), 1849);
        assert_eq!(calc.calculate_salary(&SalaryInput::ranked(15)), 1549);
        assert_eq!(calc.calculate_salary(&SalaryInput::ranked(16)), 1199);
        assert_eq!(calc.calculate_salary(&SalaryInput::unranked()), 1199);
    }

    #[test]
    fn champion_flag_overrides_rank() {
        let input = SalaryInput {
            is_champion: true,
            ..SalaryInput::ranked(12)
        };

        assert_eq!(SalaryCalculator::default().calculate_salary(&input), 2400);
    }

    #[test]
    fn streak_bonus_is_not_cumulative() {
        let calc = SalaryCalculator::default();
        let streak = |win_streak| SalaryInput {
            win_streak,
            ..SalaryInput::unranked()
        };

        assert_eq!(calc.calculate_salary(&streak(2)), 1199);
        assert_eq!(calc.calculate_salary(&streak(3)), 1299);
        assert_eq!(calc.calculate_salary(&streak(5)), 1399);
        assert_eq!(calc.calculate_salary(&streak(9)), 1399);
    }

    #[test]
    fn modifiers_are_capped() {
        let input = SalaryInput {
            opponent_is_champion: true,
            is_title_fight: true,
            win_streak: 6,
            ..SalaryInput::ranked(1)
        };

        // 2149 + 200 + 300 + 200 = 2849, capped.
        assert_eq!(SalaryCalculator::default().calculate_salary(&input), 2500);
    }

    #[test]
    fn oversized_tables_saturate_instead_of_overflowing() {
        let table = SalaryTable {
            champion: SalaryRange::new(u32::MAX, u32::MAX - 1),
            opponent_champion_bonus: u32::MAX,
            title_fight_bonus: u32::MAX,
            max_salary: u32::MAX,
            ..SalaryTable::default()
        };
        let input = SalaryInput {
            opponent_is_champion: true,
            is_title_fight: true,
            ..SalaryInput::ranked(0)
        };

        assert_eq!(SalaryCalculator::new(table).calculate_salary(&input), u32::MAX);
        assert_eq!(SalaryRange::new(2000, 2299).midpoint(), 2149);
        assert_eq!(SalaryRange::new(u32::MAX, u32::MAX - 1).midpoint(), u32::MAX - 1);
    }

    #[test]
    fn tiers_display_names() {
        assert_eq!(SalaryTier::from_rank(Some(8), false).to_string(), "Top 10");
        assert_eq!(SalaryTier::from_rank(None, false), SalaryTier::Unranked);
    }
}
