// Core modules
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{GitscopeError, Result};
pub use state::SearchCache;
