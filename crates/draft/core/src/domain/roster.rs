use std::collections::BTreeMap;

use super::fighter::{Fighter, FighterClass, FighterId};
use super::power_up::RosterPowerUp;

/// A user's lineup for one event.
///
/// Legality (six distinct fighters, captain among them, power-up targets
/// among them, at most two power-ups) is checked by
/// [`RosterValidator`](crate::validation::RosterValidator), not enforced here.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Roster {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub event_id: String,
    pub fighters: Vec<Fighter>,
    /// `None` (or an empty id) when no captain has been picked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub captain_id: Option<FighterId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_ups: Vec<RosterPowerUp>,
}

impl Roster {
    pub fn new(id: impl Into<String>, fighters: Vec<Fighter>) -> Self {
        Self {
            id: id.into(),
            fighters,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_owner(mut self, user_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self.event_id = event_id.into();
        self
    }

    #[must_use]
    pub fn with_captain(mut self, captain_id: impl Into<FighterId>) -> Self {
        self.captain_id = Some(captain_id.into());
        self
    }

    #[must_use]
    pub fn with_power_up(mut self, power_up: RosterPowerUp) -> Self {
        self.power_ups.push(power_up);
        self
    }

    /// Captain id, treating an empty id as unset.
    pub fn captain_id(&self) -> Option<&FighterId> {
        self.captain_id.as_ref().filter(|id| !id.is_empty())
    }

    pub fn captain(&self) -> Option<&Fighter> {
        let captain_id = self.captain_id()?;
        self.fighter(captain_id.as_str())
    }

    pub fn is_captain(&self, fighter_id: &str) -> bool {
        self.captain_id().is_some_and(|id| id == fighter_id)
    }

    pub fn fighter(&self, fighter_id: &str) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.id == fighter_id)
    }

    pub fn contains(&self, fighter_id: &str) -> bool {
        self.fighter(fighter_id).is_some()
    }

    /// First power-up assigned to the fighter; later ones are ignored.
    pub fn power_up_for(&self, fighter_id: &str) -> Option<&RosterPowerUp> {
        self.power_ups
            .iter()
            .find(|p| p.applied_to_fighter_id == fighter_id)
    }

    /// Fighters per class, with an extra veteran count for everyone aged
    /// `veteran_age` or older.
    ///
    /// A 36-year-old Striker counts once as `Striker` and once as `Veteran`.
    pub fn class_counts(&self, veteran_age: u32) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for fighter in &self.fighters {
            counts.increment(fighter.fighter_class);
            if fighter.is_veteran(veteran_age) {
                counts.increment(FighterClass::Veteran);
            }
        }
        counts
    }
}

/// Per-class fighter counts used by synergy rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassCounts(BTreeMap<FighterClass, u32>);

impl ClassCounts {
    pub fn get(&self, class: FighterClass) -> u32 {
        self.0.get(&class).copied().unwrap_or(0)
    }

    fn increment(&mut self, class: FighterClass) {
        *self.0.entry(class).or_insert(0) += 1;
    }
}
