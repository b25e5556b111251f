//! Search client: one blocking request per call, cancellable from any thread

use crate::error::ClientError;
use crate::lenient::from_document;
use crate::model::{CodeRes, RepositoryRes, UserRes};
use crate::transfer::{self, Next, Progress, Transfer};
use crate::{uri, validate};
use gitscope_core::config::ApiConfig;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Search API client
///
/// Holds its configuration, one HTTP client and a cancelled flag. A client
/// serves one query: once cancelled it stays cancelled.
#[derive(Debug)]
pub struct Client {
    config: ApiConfig,
    http: reqwest::blocking::Client,
    cancelled: Arc<AtomicBool>,
}

/// Cloneable handle that cancels the client it came from
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Client {
    /// Creates a client for the given API configuration
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = transfer::build_client(&config.user_agent, config.timeout())
            .map_err(ClientError::Build)?;

        Ok(Self {
            config,
            http,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Cancels any pending request (callable from another thread)
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancelled))
    }

    /// Searches users
    pub fn users(&self, query: &str) -> Result<UserRes, ClientError> {
        let root = self.get(&["search", "users"], &[("q", query)])?;
        Ok(from_document(&root))
    }

    /// Searches repositories
    pub fn repositories(&self, query: &str) -> Result<RepositoryRes, ClientError> {
        let root = self.get(&["search", "repositories"], &[("q", query)])?;
        Ok(from_document(&root))
    }

    /// Searches code, optionally scoped to one repository (`owner/name`)
    pub fn code(&self, query: &str, repo: Option<&str>) -> Result<CodeRes, ClientError> {
        let q = code_query(query, repo);
        let root = self.get(&["search", "code"], &[("q", q.as_str())])?;
        Ok(from_document(&root))
    }

    /// Fetches and validates one JSON document
    ///
    /// A transfer aborted through the cancelled flag, or one that fails once
    /// the flag is set, yields `Value::Null`, which maps to empty results.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The URI cannot be built
    /// - The transfer fails at the network layer
    /// - The transport status is not 200 (message = body)
    /// - The body is not JSON
    /// - The embedded status field reports a failure (message = message field)
    pub fn get(&self, path: &[&str], parameters: &[(&str, &str)]) -> Result<Value, ClientError> {
        let url = uri::make_uri(&self.config.root, path, parameters)?;
        log::debug!("GET {}", url);

        let response = match transfer::execute(&self.http, &url, |p| self.progress_report(p)) {
            Ok(Transfer::Completed(response)) => response,
            Ok(Transfer::Aborted) => {
                log::debug!("Request to {} cancelled", url);
                return Ok(Value::Null);
            }
            // A cancelled query is never a network failure
            Err(err) if self.is_cancelled() => {
                log::debug!("Request to {} cancelled ({})", url, err);
                return Ok(Value::Null);
            }
            Err(err) => return Err(err.into()),
        };

        validate::check_transport_status(response.status, &response.body)?;
        let root = validate::parse_document(&response.body)?;
        validate::check_embedded_status(
            &root,
            &self.config.status_field,
            &self.config.message_field,
        )?;

        Ok(root)
    }

    /// Progress callback that lets [`Client::cancel`] stop a pending transfer
    fn progress_report(&self, _progress: &Progress) -> Next {
        if self.is_cancelled() {
            Next::Abort
        } else {
            Next::Continue
        }
    }
}

/// Builds the `q` value for a code search
///
/// A non-empty repo adds a `repo:` qualifier, which goes on the wire as
/// `<query>+repo:<repo>`.
pub fn code_query(query: &str, repo: Option<&str>) -> String {
    match repo.map(str::trim).filter(|r| !r.is_empty()) {
        Some(repo) => format!("{query} repo:{repo}"),
        None => query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_query() {
        assert_eq!(code_query("addClass", Some("jquery/jquery")), "addClass repo:jquery/jquery");
        assert_eq!(code_query("addClass", Some("")), "addClass");
        assert_eq!(code_query("addClass", Some("   ")), "addClass");
        assert_eq!(code_query("addClass", None), "addClass");
    }

    #[test]
    fn test_cancel_handle_shares_flag() {
        let client = Client::new(ApiConfig::default()).unwrap();
        let handle = client.cancel_handle();
        assert!(!client.is_cancelled());

        std::thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(client.is_cancelled());
        assert_eq!(client.progress_report(&Progress { received: 0, total: None }), Next::Abort);
    }

    #[test]
    fn test_progress_continues_until_cancelled() {
        let client = Client::new(ApiConfig::default()).unwrap();
        let tick = Progress {
            received: 10,
            total: Some(20),
        };
        assert_eq!(client.progress_report(&tick), Next::Continue);
        client.cancel();
        assert_eq!(client.progress_report(&tick), Next::Abort);
    }
}
