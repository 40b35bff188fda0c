use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier of a fighter, as issued by the document store.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FighterId(pub String);

impl FighterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id is how upstream records spell "not selected".
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for FighterId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for FighterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for FighterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FighterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FighterId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FighterId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary fighting style, used for roster synergies.
///
/// `Veteran` is a class in its own right; veteran *eligibility* for synergy
/// counting is age-derived and independent of the class (see [`Fighter::is_veteran`]).
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterClass {
    Striker,
    Grappler,
    #[strum(serialize = "All-Rounder")]
    #[cfg_attr(feature = "serde", serde(rename = "All-Rounder"))]
    AllRounder,
    Veteran,
}

/// Scoring snapshot of a fighter.
///
/// Salary and ranking live on ingestion records, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub fighter_class: FighterClass,
    pub age: u32,
}

impl Fighter {
    pub fn new(
        id: impl Into<FighterId>,
        name: impl Into<String>,
        fighter_class: FighterClass,
        age: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fighter_class,
            age,
        }
    }

    /// Age-based veteran eligibility (`age >= veteran_age`).
    #[inline]
    pub fn is_veteran(&self, veteran_age: u32) -> bool {
        self.age >= veteran_age
    }
}
