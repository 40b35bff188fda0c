//! Content factory for loading everything an event needs from one directory.

use std::path::{Path, PathBuf};

use draft_core::{DraftConfig, Roster};

use crate::loaders::{
    CardCatalog, CardCatalogLoader, ConfigLoader, EventFixture, EventLoader, LoadResult,
};

/// Content factory that loads draft content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── scoring.toml
/// ├── power_ups.toml
/// └── events/
///     └── <event-id>.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::BUNDLED_DATA_DIR)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rule tables from `scoring.toml`.
    pub fn load_config(&self) -> LoadResult<DraftConfig> {
        ConfigLoader::load(&self.data_dir.join("scoring.toml"))
    }

    /// Load the card catalog from `power_ups.toml`.
    pub fn load_cards(&self) -> LoadResult<CardCatalog> {
        CardCatalogLoader::load(&self.data_dir.join("power_ups.toml"))
    }

    /// Load `events/<event_id>.toml`.
    pub fn load_event(&self, event_id: &str) -> LoadResult<EventFixture> {
        let path = self.data_dir.join("events").join(format!("{event_id}.toml"));
        EventLoader::load(&path)
    }

    /// Load an event and resolve its rosters against the bundled catalog.
    pub fn load_event_rosters(&self, event_id: &str) -> LoadResult<(EventFixture, Vec<Roster>)> {
        let cards = self.load_cards()?;
        let fixture = self.load_event(event_id)?;
        let rosters = fixture.resolve_rosters(&cards)?;
        Ok((fixture, rosters))
    }
}
