//! Data-driven draft content and loaders.
//!
//! This crate provides loaders for the TOML data files the scoring engine runs on:
//! - Rule tables: scoring weights, roster rules, salaries, XP ladder
//! - Power-up card catalogs
//! - Event fixtures: fight results plus the rosters entered for the event
//!
//! Card references on stored rosters are resolved against the catalog here, so
//! `draft-core` only ever sees rosters whose power-ups carry their effect.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardCatalog, CardCatalogLoader, ConfigLoader, ContentFactory, EventFixture, EventLoader,
    LoadResult, PowerUpSelection, RosterRecord,
};

/// Directory of the data files shipped with this crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
