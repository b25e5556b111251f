//! Defaults shared by the configuration model and the CLI

/// API endpoint defaults
pub mod api {
    /// Root of the code-hosting REST API
    pub const ROOT: &str = "https://api.github.com";

    /// User agent sent on every request
    pub const USER_AGENT: &str = "gitscope";

    /// JSON field carrying an embedded status code
    pub const STATUS_FIELD: &str = "cod";

    /// JSON field carrying the message for an embedded failure
    pub const MESSAGE_FIELD: &str = "message";
}

/// Search defaults
pub mod search {
    /// Query used when the user submits a blank search
    pub const DEFAULT_QUERY: &str = "ubuntu-touch";
}

/// Environment variable overrides
pub mod env {
    /// Overrides `api.root`
    pub const API_ROOT: &str = "GITSCOPE_API_ROOT";

    /// Overrides `api.user_agent`
    pub const USER_AGENT: &str = "GITSCOPE_USER_AGENT";

    /// Overrides the directory holding `cache.json`
    pub const CACHE_DIR: &str = "GITSCOPE_CACHE_DIR";
}

/// File names inside the config/cache directories
pub mod files {
    pub const APP_DIR: &str = "gitscope";
    pub const CONFIG: &str = "config.toml";
    pub const CACHE: &str = "cache.json";
}
