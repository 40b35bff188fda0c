//! Rule table loader.

use std::path::Path;

use draft_core::{DraftConfig, DraftError};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`DraftConfig`] from TOML files.
///
/// Every table is optional; missing tables and keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate rule tables from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing DraftConfig
    ///
    /// # Returns
    ///
    /// Returns a DraftConfig that passed [`DraftConfig::validate`].
    pub fn load(path: &Path) -> LoadResult<DraftConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        info!(
            path = %path.display(),
            roster_size = config.roster.roster_size,
            salary_cap = config.roster.salary_cap,
            levels = config.xp.levels.len(),
            "loaded rule tables"
        );
        Ok(config)
    }

    /// Parse and validate rule tables from TOML text.
    pub fn parse(content: &str) -> LoadResult<DraftConfig> {
        let config: DraftConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config [{}]: {}", e.error_code(), e))?;

        Ok(config)
    }
}
