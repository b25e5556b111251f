pub mod consts;
pub mod model;

pub use model::{ApiConfig, Config, SearchConfig, SearchSettings};

use std::path::PathBuf;

/// Default location of config.toml (`<config dir>/gitscope/config.toml`)
///
/// Falls back to the current directory when the platform has no config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(consts::files::APP_DIR)
        .join(consts::files::CONFIG)
}

/// Directory holding cache.json
///
/// `GITSCOPE_CACHE_DIR` wins over the platform cache dir.
pub fn cache_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(consts::env::CACHE_DIR)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(consts::files::APP_DIR)
}

/// Default location of cache.json
pub fn default_cache_path() -> PathBuf {
    cache_dir().join(consts::files::CACHE)
}
