//! Global context for CLI commands

use anyhow::Result;
use gitscope_core::config::{default_cache_path, default_config_path};
use gitscope_core::{Config, SearchCache};
use std::path::{Path, PathBuf};

/// Effective config plus the search cache
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub cache: SearchCache,
    pub cache_path: PathBuf,
}

impl Context {
    /// Loads config (file, then env overrides) and the cache
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be parsed
    /// - The resulting config is invalid
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);
        let config = Config::load_or_default(&config_path)?;

        let cache_path = default_cache_path();
        let cache = SearchCache::load_or_empty(&cache_path);

        if verbose {
            eprintln!("Config: {}", config_path.display());
            eprintln!("Cache: {}", cache_path.display());
        }

        Ok(Self {
            config,
            config_path,
            cache,
            cache_path,
        })
    }

    /// Save the current cache to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file cannot be written
    pub fn save_cache(&self) -> Result<()> {
        self.cache.save(&self.cache_path)?;
        Ok(())
    }
}
