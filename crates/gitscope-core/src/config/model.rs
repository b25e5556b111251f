use super::consts;
use crate::error::{GitscopeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// config.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub settings: SearchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Unset leaves the transport default in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_status_field")]
    pub status_field: String,
    #[serde(default = "default_message_field")]
    pub message_field: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            status_field: default_status_field(),
            message_field: default_message_field(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_root() -> String {
    consts::api::ROOT.to_string()
}

fn default_user_agent() -> String {
    consts::api::USER_AGENT.to_string()
}

fn default_status_field() -> String {
    consts::api::STATUS_FIELD.to_string()
}

fn default_message_field() -> String {
    consts::api::MESSAGE_FIELD.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_query")]
    pub default_query: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_query: default_query(),
        }
    }
}

fn default_query() -> String {
    consts::search::DEFAULT_QUERY.to_string()
}

/// Which repository fields a repository search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_true")]
    pub search_name: bool,
    #[serde(default = "default_true")]
    pub search_description: bool,
    #[serde(default)]
    pub search_readme: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            search_name: true,
            search_description: true,
            search_readme: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl SearchSettings {
    /// `in:` qualifier for repository searches
    ///
    /// Returns `None` when every field or no field is enabled, since both
    /// mean "search everywhere".
    pub fn in_qualifier(&self) -> Option<String> {
        let fields: Vec<&str> = [
            (self.search_name, "name"),
            (self.search_description, "description"),
            (self.search_readme, "readme"),
        ]
        .into_iter()
        .filter_map(|(enabled, field)| enabled.then_some(field))
        .collect();

        if fields.is_empty() || fields.len() == 3 {
            None
        } else {
            Some(format!("in:{}", fields.join(",")))
        }
    }
}

impl Config {
    /// config.toml を読み込む
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GitscopeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GitscopeError::ConfigParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| GitscopeError::ConfigParseError(e.to_string()))
    }

    /// config.toml に書き込む
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GitscopeError::ConfigParseError(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path.as_ref(), content).map_err(GitscopeError::IoError)?;

        Ok(())
    }

    /// Reads `path` if it exists, otherwise starts from defaults
    ///
    /// Environment overrides are applied and the result is validated either way.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = match Self::from_file(&path) {
            Ok(config) => config,
            Err(GitscopeError::ConfigNotFound { path }) => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => return Err(e),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies `GITSCOPE_API_ROOT` and `GITSCOPE_USER_AGENT`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var(consts::env::API_ROOT)
            && !root.is_empty()
        {
            self.api.root = root;
        }
        if let Ok(agent) = std::env::var(consts::env::USER_AGENT)
            && !agent.is_empty()
        {
            self.api.user_agent = agent;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let root = Url::parse(&self.api.root).map_err(|e| GitscopeError::ConfigInvalidValue {
            field: "api.root".to_string(),
            reason: e.to_string(),
        })?;
        if root.cannot_be_a_base() {
            return Err(GitscopeError::ConfigInvalidValue {
                field: "api.root".to_string(),
                reason: format!("'{}' cannot be a base URL", self.api.root),
            });
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(GitscopeError::ConfigInvalidValue {
                field: "api.user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.api.status_field.is_empty() {
            return Err(GitscopeError::ConfigInvalidValue {
                field: "api.status_field".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.root, "https://api.github.com");
        assert_eq!(config.api.user_agent, "gitscope");
        assert_eq!(config.api.status_field, "cod");
        assert_eq!(config.search.default_query, "ubuntu-touch");
        assert!(config.api.timeout().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[api]
root = "https://ghe.example.com/api/v3"
user_agent = "my-agent"
timeout_secs = 10
status_field = "status"
message_field = "error"

[search]
default_query = "rust"

[settings]
search_name = false
search_description = true
search_readme = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.root, "https://ghe.example.com/api/v3");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.api.message_field, "error");
        assert_eq!(config.search.default_query, "rust");
        assert!(!config.settings.search_name);
        assert!(config.settings.search_readme);
    }

    #[test]
    fn test_in_qualifier() {
        let settings = SearchSettings::default();
        assert_eq!(
            settings.in_qualifier().as_deref(),
            Some("in:name,description")
        );

        let all = SearchSettings {
            search_name: true,
            search_description: true,
            search_readme: true,
        };
        assert_eq!(all.in_qualifier(), None);

        let none = SearchSettings {
            search_name: false,
            search_description: false,
            search_readme: false,
        };
        assert_eq!(none.in_qualifier(), None);

        let readme = SearchSettings {
            search_name: false,
            search_description: false,
            search_readme: true,
        };
        assert_eq!(readme.in_qualifier().as_deref(), Some("in:readme"));
    }

    #[test]
    fn test_validate_rejects_bad_root() {
        let mut config = Config::default();
        config.api.root = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.root"));

        config.api.root = "mailto:someone@example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.user_agent"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.search.default_query = "scopes".to_string();
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Config::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GitscopeError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api\nroot = ").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG_PARSE_ERROR"));
    }
}
