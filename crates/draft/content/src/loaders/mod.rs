//! Content loaders for reading draft data from files.

pub mod cards;
pub mod config;
pub mod event;
pub mod factory;

pub use cards::{CardCatalog, CardCatalogLoader};
pub use config::ConfigLoader;
pub use event::{EventFixture, EventLoader, PowerUpSelection, RosterRecord};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
