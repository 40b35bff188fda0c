//! Data-driven power-up cards.
//!
//! A card pairs an [`PowerUpEffectType`] tag with an effect configuration. The
//! configuration arrives from data files or a document store and is identified
//! by its shape, so a card may carry a config that does not match its tag.
//! [`PowerUpCard::effect`] resolves the pair into a [`PowerUpEffect`] and
//! rejects mismatches; scoring treats an unresolved effect as neutral.

use super::fighter::FighterId;

// ============================================================================
// Effect Types
// ============================================================================

/// The four effect families a card can belong to.
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
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PowerUpEffectType {
    /// Different multipliers for a win and a loss.
    MultiplierWinLoss,
    /// Score a loss as a win when the fight carries a given bonus.
    LossToWinWithBonus,
    /// Multiplier for a win in a specific round.
    MultiplierRoundFinish,
    /// Flat points for every promotion bonus received.
    FlatBonusPerUfcBonus,
}

/// Promotion bonus that unlocks a loss-to-win card.
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
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum RequiredBonus {
    /// Fight of the Night.
    Fotn,
    /// Performance of the Night.
    Potn,
    /// Either bonus.
    Any,
}

// ============================================================================
// Effect Configurations
// ============================================================================

/// Hype Train style: `win_multiplier` on a win, `loss_multiplier` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MultiplierWinLossConfig {
    pub win_multiplier: f64,
    /// May be negative.
    pub loss_multiplier: f64,
}

/// Resilience style: a non-winner with the required bonus scores as a winner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LossToWinWithBonusConfig {
    pub required_bonus: RequiredBonus,
    /// Method multiplier used in place of the real one (1.2 = unanimous decision).
    pub treat_as_method_multiplier: f64,
}

/// Blitz style: `multiplier` for a win in `target_round`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MultiplierRoundFinishConfig {
    pub target_round: u8,
    pub multiplier: f64,
    /// When set, decisions and draws never qualify.
    pub must_be_finish: bool,
}

/// Red Mist style: flat points per promotion bonus (0-2).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatBonusPerUfcBonusConfig {
    #[cfg_attr(feature = "serde", serde(rename = "bonusPerUFCBonus"))]
    pub bonus_per_ufc_bonus: f64,
}

/// Placeholder for a config object that matches none of the known shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnknownConfig;

#[cfg(feature = "serde")]
impl serde::Serialize for UnknownConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        serializer.serialize_map(Some(0))?.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnknownConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer).map(|_| UnknownConfig)
    }
}

/// Effect configuration as stored on a card, identified by shape.
///
/// Variants are tried in declaration order; the first shape whose required
/// fields are all present wins. Anything else lands in `Unrecognized`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum EffectConfig {
    LossToWinWithBonus(LossToWinWithBonusConfig),
    MultiplierRoundFinish(MultiplierRoundFinishConfig),
    MultiplierWinLoss(MultiplierWinLossConfig),
    FlatBonusPerUfcBonus(FlatBonusPerUfcBonusConfig),
    Unrecognized(UnknownConfig),
}

impl EffectConfig {
    /// The effect family this config's shape belongs to.
    pub const fn shape(&self) -> Option<PowerUpEffectType> {
        match self {
            Self::MultiplierWinLoss(_) => Some(PowerUpEffectType::MultiplierWinLoss),
            Self::LossToWinWithBonus(_) => Some(PowerUpEffectType::LossToWinWithBonus),
            Self::MultiplierRoundFinish(_) => Some(PowerUpEffectType::MultiplierRoundFinish),
            Self::FlatBonusPerUfcBonus(_) => Some(PowerUpEffectType::FlatBonusPerUfcBonus),
            Self::Unrecognized(_) => None,
        }
    }
}

// ============================================================================
// Resolved Effect
// ============================================================================

/// A power-up effect whose config is known to match its type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "config", rename_all = "snake_case")
)]
pub enum PowerUpEffect {
    MultiplierWinLoss(MultiplierWinLossConfig),
    LossToWinWithBonus(LossToWinWithBonusConfig),
    MultiplierRoundFinish(MultiplierRoundFinishConfig),
    FlatBonusPerUfcBonus(FlatBonusPerUfcBonusConfig),
}

impl PowerUpEffect {
    /// 2x on a win, -2x on a loss.
    pub const HYPE_TRAIN: Self = Self::MultiplierWinLoss(MultiplierWinLossConfig {
        win_multiplier: 2.0,
        loss_multiplier: -2.0,
    });

    /// Loss with Fight of the Night scores as a unanimous-decision win.
    pub const RESILIENCE: Self = Self::LossToWinWithBonus(LossToWinWithBonusConfig {
        required_bonus: RequiredBonus::Fotn,
        treat_as_method_multiplier: 1.2,
    });

    /// 3x for a first-round finish.
    pub const BLITZ: Self = Self::MultiplierRoundFinish(MultiplierRoundFinishConfig {
        target_round: 1,
        multiplier: 3.0,
        must_be_finish: true,
    });

    /// +50 per promotion bonus.
    pub const RED_MIST: Self = Self::FlatBonusPerUfcBonus(FlatBonusPerUfcBonusConfig {
        bonus_per_ufc_bonus: 50.0,
    });

    pub const fn effect_type(&self) -> PowerUpEffectType {
        match self {
            Self::MultiplierWinLoss(_) => PowerUpEffectType::MultiplierWinLoss,
            Self::LossToWinWithBonus(_) => PowerUpEffectType::LossToWinWithBonus,
            Self::MultiplierRoundFinish(_) => PowerUpEffectType::MultiplierRoundFinish,
            Self::FlatBonusPerUfcBonus(_) => PowerUpEffectType::FlatBonusPerUfcBonus,
        }
    }

    /// Pairs a type tag with a config, `None` when the shapes disagree.
    pub fn resolve(effect_type: PowerUpEffectType, config: &EffectConfig) -> Option<Self> {
        match (effect_type, *config) {
            (PowerUpEffectType::MultiplierWinLoss, EffectConfig::MultiplierWinLoss(c)) => {
                Some(Self::MultiplierWinLoss(c))
            }
            (PowerUpEffectType::LossToWinWithBonus, EffectConfig::LossToWinWithBonus(c)) => {
                Some(Self::LossToWinWithBonus(c))
            }
            (PowerUpEffectType::MultiplierRoundFinish, EffectConfig::MultiplierRoundFinish(c)) => {
                Some(Self::MultiplierRoundFinish(c))
            }
            (PowerUpEffectType::FlatBonusPerUfcBonus, EffectConfig::FlatBonusPerUfcBonus(c)) => {
                Some(Self::FlatBonusPerUfcBonus(c))
            }
            _ => None,
        }
    }

    /// The config half, for storing the effect back on a card.
    pub const fn config(&self) -> EffectConfig {
        match *self {
            Self::MultiplierWinLoss(c) => EffectConfig::MultiplierWinLoss(c),
            Self::LossToWinWithBonus(c) => EffectConfig::LossToWinWithBonus(c),
            Self::MultiplierRoundFinish(c) => EffectConfig::MultiplierRoundFinish(c),
            Self::FlatBonusPerUfcBonus(c) => EffectConfig::FlatBonusPerUfcBonus(c),
        }
    }
}

// ============================================================================
// Power-Up Card
// ============================================================================

/// A configurable power-up card.
///
/// Names and descriptions are display data; behaviour is entirely determined
/// by `effect_type` and `effect_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PowerUpCard {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub effect_type: PowerUpEffectType,
    pub effect_config: EffectConfig,
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub is_active: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cost: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
}

#[cfg(feature = "serde")]
const fn default_active() -> bool {
    true
}

impl PowerUpCard {
    /// Builds an active card whose config matches `effect`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        effect: PowerUpEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            effect_type: effect.effect_type(),
            effect_config: effect.config(),
            is_active: true,
            cost: None,
            image_url: None,
        }
    }

    /// Resolves the card's effect, `None` on a type/config mismatch.
    pub fn effect(&self) -> Option<PowerUpEffect> {
        PowerUpEffect::resolve(self.effect_type, &self.effect_config)
    }

    pub fn hype_train() -> Self {
        Self::new(
            "hype-train",
            "Hype Train",
            "2x points on a win, -2x on a loss",
            PowerUpEffect::HYPE_TRAIN,
        )
    }

    pub fn resilience() -> Self {
        Self::new(
            "resilience",
            "Resilience",
            "A loss with Fight of the Night scores as a unanimous decision win",
            PowerUpEffect::RESILIENCE,
        )
    }

    pub fn blitz() -> Self {
        Self::new(
            "blitz",
            "Blitz",
            "3x points for a first-round finish",
            PowerUpEffect::BLITZ,
        )
    }

    pub fn red_mist() -> Self {
        Self::new(
            "red-mist",
            "Red Mist",
            "+50 points per UFC bonus",
            PowerUpEffect::RED_MIST,
        )
    }

    /// The four launch cards.
    pub fn presets() -> [Self; 4] {
        [
            Self::hype_train(),
            Self::resilience(),
            Self::blitz(),
            Self::red_mist(),
        ]
    }
}

// ============================================================================
// Roster Assignment
// ============================================================================

/// A card assigned to one fighter on a roster.
///
/// `effect_type` and `effect` are denormalized from the card when the roster
/// is loaded; `effect` is `None` when the card's config did not resolve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RosterPowerUp {
    pub power_up_card_id: String,
    pub applied_to_fighter_id: FighterId,
    pub effect_type: PowerUpEffectType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<PowerUpEffect>,
}

impl RosterPowerUp {
    pub fn from_card(card: &PowerUpCard, applied_to_fighter_id: impl Into<FighterId>) -> Self {
        Self {
            power_up_card_id: card.id.clone(),
            applied_to_fighter_id: applied_to_fighter_id.into(),
            effect_type: card.effect_type,
            effect: card.effect(),
        }
    }
}
