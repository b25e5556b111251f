//! Test utilities for gitscope
//!
//! This crate provides shared testing utilities used across the gitscope workspace.

pub mod env;
pub mod fixtures;
pub mod mock;

pub use env::{ENV_LOCK, isolated_cache_path, with_isolated_env};
pub use mock::{STALLED_BODY, stalled_server};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// All test temporary files end up in one gitignored location that is easy
/// to clean up manually.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use gitscope_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_is_under_tmp() {
        let temp = temp_dir_in_workspace();
        assert!(temp.path().exists());
        assert!(
            temp.path()
                .parent()
                .is_some_and(|parent| parent.ends_with(".tmp"))
        );
    }

    #[test]
    fn test_with_isolated_env_restores_variables() {
        let before = std::env::var("GITSCOPE_CACHE_DIR").ok();

        let seen = with_isolated_env(|home| {
            let cache_dir = std::env::var("GITSCOPE_CACHE_DIR").unwrap();
            assert!(cache_dir.starts_with(home.to_str().unwrap()));
            assert!(std::env::var("GITSCOPE_API_ROOT").is_err());
            cache_dir
        });

        assert!(!seen.is_empty());
        assert_eq!(std::env::var("GITSCOPE_CACHE_DIR").ok(), before);
    }

    #[test]
    fn test_search_body_counts_items() {
        let body = fixtures::search_body(vec![fixtures::user_json("alice", 1)]);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["total_count"], 1);
        assert_eq!(value["items"][0]["login"], "alice");
    }

    #[test]
    fn test_code_json_nests_repository_owner() {
        let code = fixtures::code_json("src/lib.rs", "alice", "widgets");
        assert_eq!(code["name"], "lib.rs");
        assert_eq!(code["repository"]["owner"]["login"], "alice");
        assert_eq!(code["repository"]["full_name"], "alice/widgets");
    }
}
