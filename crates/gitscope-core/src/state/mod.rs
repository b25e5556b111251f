use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GitscopeError, Result};

const SCHEMA_VERSION: &str = "1.0";

/// cache.json schema - the last query and repository the scope worked with
///
/// Disposable: losing it only forgets the code search scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCache {
    pub schema_version: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::empty()
    }
}

impl SearchCache {
    /// 空の SearchCache を作成
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            query: None,
            repo: None,
            updated_at: None,
        }
    }

    /// cache.json を読み込む
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GitscopeError::CacheReadError(format!("Failed to read: {}", e)))?;

        let cache: Self = serde_json::from_str(&content)
            .map_err(|e| GitscopeError::CacheReadError(format!("Failed to parse: {}", e)))?;

        match cache.schema_version.as_str() {
            SCHEMA_VERSION => Ok(cache),
            version => Err(GitscopeError::CacheInvalidSchema(version.to_string())),
        }
    }

    /// cache.json が存在すれば読み込み、なければ空の SearchCache を返す
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            if path.as_ref().exists() {
                log::warn!("Ignoring unreadable cache: {}", e);
            }
            Self::empty()
        })
    }

    /// cache.json に書き込む（原子的更新）
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let parent = ensure_parent_dir(path)?;
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            GitscopeError::CacheWriteError(format!("Failed to serialize: {}", e))
        })?;
        atomic_write_json(&content, path, parent)
    }

    /// Records a completed query and, when known, the repository it settled on
    pub fn remember(&mut self, query: &str, repo: Option<&str>) {
        self.query = Some(query.to_string());
        if let Some(repo) = repo {
            self.repo = Some(repo.to_string());
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Ensure parent directory exists and return it
fn ensure_parent_dir(path: &Path) -> Result<&Path> {
    let parent = path.parent().ok_or_else(|| {
        GitscopeError::CacheWriteError("Cache path has no parent directory".to_string())
    })?;
    std::fs::create_dir_all(parent).map_err(|e| {
        GitscopeError::CacheWriteError(format!("Failed to create parent dir: {}", e))
    })?;
    Ok(parent)
}

/// Write JSON atomically using NamedTempFile + persist (Windows compatible)
fn atomic_write_json(content: &str, path: &Path, parent: &Path) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        GitscopeError::CacheWriteError(format!("Failed to create temp file: {}", e))
    })?;

    temp_file.write_all(content.as_bytes()).map_err(|e| {
        GitscopeError::CacheWriteError(format!("Failed to write temp file: {}", e))
    })?;

    temp_file.as_file().sync_all().map_err(|e| {
        GitscopeError::CacheWriteError(format!("Failed to sync temp file: {}", e))
    })?;

    temp_file.persist(path).map_err(|e| {
        GitscopeError::CacheWriteError(format!("Failed to persist temp file: {}", e))
    })?;

    // Fsync parent directory for durability (Unix only)
    #[cfg(unix)]
    {
        let parent_file = std::fs::File::open(parent).map_err(|e| {
            GitscopeError::CacheWriteError(format!("Failed to open parent dir: {}", e))
        })?;
        parent_file.sync_all().map_err(|e| {
            GitscopeError::CacheWriteError(format!("Failed to sync parent dir: {}", e))
        })?;
    }

    Ok(())
}
