//! Environment isolation utilities for testing
//!
//! This module provides functions for isolating environment variables
//! during tests to prevent interference between parallel test executions.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables that steer gitscope and are controlled by [`with_isolated_env`]
const CONTROLLED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "XDG_CACHE_HOME",
    "GITSCOPE_CACHE_DIR",
    "GITSCOPE_API_ROOT",
    "GITSCOPE_USER_AGENT",
];

/// Run a test with an isolated gitscope environment
///
/// This helper:
/// 1. Creates an isolated HOME with its own config and cache directories
/// 2. Points `GITSCOPE_CACHE_DIR` at the isolated cache directory
/// 3. Clears `GITSCOPE_API_ROOT` and `GITSCOPE_USER_AGENT`
/// 4. Serializes access through [`ENV_LOCK`] and restores everything afterwards
///
/// The closure receives the isolated HOME directory.
///
/// # Examples
///
/// ```no_run
/// use gitscope_testkit::with_isolated_env;
///
/// fn test_cache_lands_in_isolated_home() {
///     with_isolated_env(|home| {
///         let cache = home.join(".cache/gitscope/cache.json");
///         assert!(!cache.exists());
///     });
/// }
/// ```
pub fn with_isolated_env<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Environment variables stay valid after a panic; the lock only serializes access
        poisoned.into_inner()
    });

    let originals: Vec<(&str, Option<String>)> = CONTROLLED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();

    let fake_home = TempDir::new().unwrap();
    let home = fake_home.path().to_path_buf();
    let config_home = home.join(".config");
    let cache_home = home.join(".cache");
    let gitscope_cache = cache_home.join("gitscope");
    std::fs::create_dir_all(&config_home).unwrap();
    std::fs::create_dir_all(&gitscope_cache).unwrap();

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        std::env::set_var("HOME", &home);
        std::env::set_var("XDG_CONFIG_HOME", &config_home);
        std::env::set_var("XDG_CACHE_HOME", &cache_home);
        std::env::set_var("GITSCOPE_CACHE_DIR", &gitscope_cache);
        std::env::remove_var("GITSCOPE_API_ROOT");
        std::env::remove_var("GITSCOPE_USER_AGENT");
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&home)));

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        for (name, value) in originals {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    drop(fake_home);

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Isolated cache file path inside a HOME created by [`with_isolated_env`]
pub fn isolated_cache_path(home: &Path) -> PathBuf {
    home.join(".cache").join("gitscope").join("cache.json")
}
