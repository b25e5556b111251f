//! Search API client for gitscope.
//!
//! This crate talks to the code-hosting platform's search endpoints and maps
//! their JSON into fixed-schema result records.
//!
//! # Architecture
//!
//! - [`uri`]: request URI construction from root, path segments and parameters
//! - [`transfer`]: blocking GET with a progress callback that can abort
//! - [`validate`]: transport status, JSON parsing and embedded status checks
//! - [`lenient`]: per-field coercion with zero-value fallback
//! - [`model`]: `Owner`, `User`, `Repository`, `Code` and their envelopes
//! - [`client`]: the [`Client`] tying the above together
//!
//! # Request Flow
//!
//! ```text
//! Client::repositories("tetris")
//!     ↓
//! make_uri(root, ["search", "repositories"], [("q", "tetris")])
//!     ↓
//! execute() ── progress tick ──→ cancelled? → Aborted → empty result
//!     ↓ (completed)
//! status == 200?            no → ClientError::Status(body)
//!     ↓
//! parse JSON                 bad → ClientError::Decode
//!     ↓
//! embedded "cod" == 200?    no → ClientError::Api(message)
//!     ↓
//! from_document::<RepositoryRes>()
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use gitscope_api::Client;
//! use gitscope_core::config::ApiConfig;
//!
//! # fn main() -> Result<(), gitscope_api::ClientError> {
//! let client = Client::new(ApiConfig::default())?;
//! let result = client.code("addClass", Some("jquery/jquery"))?;
//! for code in &result.codes {
//!     println!("{} in {}", code.path, code.repository.full_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod lenient;
pub mod model;
pub mod transfer;
pub mod uri;
pub mod validate;

// Re-export commonly used types
pub use client::{CancelHandle, Client, code_query};
pub use error::ClientError;
pub use model::{Code, CodeRes, Owner, Repository, RepositoryRes, User, UserRes};
